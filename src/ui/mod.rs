//! Console presentation.
//!
//! Cosmetic output (screen clearing, the greeting) lives behind the
//! [`Presentation`] trait so the input and arithmetic code never touches
//! terminal control sequences.

mod banner;

use std::io;

pub use banner::TerminalBanner;

/// Horizontal rule printed between sections and after rejected attempts.
pub const SEPARATOR: &str = "----------------";

/// Something that can greet the user before the run starts.
pub trait Presentation {
    fn show_banner(&mut self) -> io::Result<()>;
}

/// Presentation that prints nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Presentation for Silent {
    fn show_banner(&mut self) -> io::Result<()> {
        Ok(())
    }
}
