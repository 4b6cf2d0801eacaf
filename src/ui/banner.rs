//! Startup banner.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use owo_colors::OwoColorize;

use super::{Presentation, SEPARATOR};
use crate::VERSION;

/// Banner written to a terminal-like stream.
pub struct TerminalBanner<W> {
    out: W,
    version: String,
    clear_screen: bool,
    color: bool,
}

impl<W: Write> TerminalBanner<W> {
    /// Create a banner showing this build's version.
    pub fn new(out: W) -> Self {
        Self {
            out,
            version: VERSION.to_string(),
            clear_screen: true,
            color: false,
        }
    }

    #[cfg(test)]
    fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set whether to clear the screen first.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Enable coloured output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Return the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn greeting(&self) -> String {
        format!("Hello Rust World! {}", self.version)
    }
}

impl<W: Write> Presentation for TerminalBanner<W> {
    fn show_banner(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let greeting = self.greeting();
        if self.color {
            writeln!(self.out, " {}", greeting.bold().green())?;
        } else {
            writeln!(self.out, " {}", greeting)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, " Add any two numbers.")?;
        writeln!(self.out, "{}", SEPARATOR)?;
        self.out.flush()
    }
}
