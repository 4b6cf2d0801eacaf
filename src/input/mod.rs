//! Validated interactive input.
//!
//! # Overview
//!
//! - **InputReader**: prompts and reads one integer per line
//! - **RetryBudget**: bounded count of rejected attempts per operand
//! - **acquire_with_retry**: drives the reader until a value arrives or the
//!   budget is spent
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use hello_add::error::Operand;
//! use hello_add::input::{acquire_with_retry, AcquisitionState, InputReader, RetryBudget};
//!
//! let mut reader = InputReader::new(Cursor::new(b"nope\n42\n".to_vec()), Vec::new());
//! let mut budget = RetryBudget::new(4);
//!
//! let state = acquire_with_retry(&mut reader, Operand::A, &mut budget).unwrap();
//! assert_eq!(state, AcquisitionState::Acquired(42));
//! assert_eq!(budget.remaining(), 3);
//! ```

mod reader;
mod retry;

pub use reader::{parse_integer, AttemptFailure, InputAttempt, InputReader};
pub use retry::{acquire_with_retry, AcquisitionState, RetryBudget};
