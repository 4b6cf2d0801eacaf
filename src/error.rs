//! Error taxonomy and exit-code mapping.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code when the first CLI operand is not an integer.
pub const EXIT_MALFORMED_A: u8 = 1;
/// Exit code when the second CLI operand is not an integer.
pub const EXIT_MALFORMED_B: u8 = 2;
/// Exit code when interactive acquisition of `a` ran out of retries.
pub const EXIT_EXHAUSTED_A: u8 = 3;
/// Exit code when interactive acquisition of `b` ran out of retries.
pub const EXIT_EXHAUSTED_B: u8 = 4;
/// Exit code for an invalid configuration.
pub const EXIT_CONFIG: u8 = 5;
/// Exit code for a failure on the console streams.
pub const EXIT_IO: u8 = 6;
/// Exit code for command-line usage errors (sysexits `EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;

/// One of the two values being added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

impl Operand {
    /// Short name used in prompts and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Operand::A => "a",
            Operand::B => "b",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that terminate a run.
#[derive(Error, Debug)]
pub enum AppError {
    /// A positional CLI operand could not be parsed as an integer.
    #[error("CLI entry for {operand} is not valid: {reason}")]
    MalformedArgument {
        operand: Operand,
        raw: String,
        reason: String,
    },

    /// Every interactive attempt for an operand was rejected.
    #[error("Too many invalid attempts for {operand}. Exiting.")]
    RetryExhausted { operand: Operand, attempts: u32 },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing to or reading from the console failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Process exit code reserved for this failure cause.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MalformedArgument { operand: Operand::A, .. } => EXIT_MALFORMED_A,
            AppError::MalformedArgument { operand: Operand::B, .. } => EXIT_MALFORMED_B,
            AppError::RetryExhausted { operand: Operand::A, .. } => EXIT_EXHAUSTED_A,
            AppError::RetryExhausted { operand: Operand::B, .. } => EXIT_EXHAUSTED_B,
            AppError::Config(_) => EXIT_CONFIG,
            AppError::Io(_) => EXIT_IO,
        }
    }
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
