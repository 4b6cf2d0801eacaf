//! Hello World console program that adds two integers.
//!
//! Operands come from the command line or from validated, retry-bounded
//! interactive prompts. The sum saturates at the `i32` bounds instead of
//! overflowing.

pub mod app;
pub mod arith;
pub mod config;
pub mod error;
pub mod input;
pub mod ui;

pub use app::{App, InputSource, Outcome};
pub use arith::{add, Overflow, SaturatingAdder, Sum};
pub use crate::config::AppConfig;
pub use error::{AppError, AppResult, Operand};

/// Build version shown in the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
