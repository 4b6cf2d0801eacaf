//! Line-oriented integer reader.

use std::fmt;
use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

const INVALID_INPUT_MESSAGE: &str = "Invalid input. Clearing stream...";

/// Why a single attempt did not yield an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    /// The line held no token
    Blank,
    /// The token is not an `i32` (message from the integer parser)
    NotAnInteger(String),
    /// The input stream is closed
    EndOfInput,
    /// Reading the line failed
    Read(String),
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Blank => f.write_str("empty input"),
            AttemptFailure::NotAnInteger(reason) => write!(f, "not an integer: {}", reason),
            AttemptFailure::EndOfInput => f.write_str("end of input"),
            AttemptFailure::Read(reason) => write!(f, "read failed: {}", reason),
        }
    }
}

/// One prompt cycle: the consumed line and what it parsed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAttempt {
    /// Line as read, without the trailing newline
    pub raw: String,
    /// Parsed value or the reason it was rejected
    pub outcome: Result<i32, AttemptFailure>,
}

impl InputAttempt {
    /// The parsed value, if the attempt succeeded.
    pub fn value(&self) -> Option<i32> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Parse a whole token as a signed 32-bit integer.
///
/// Leading `+` or `-` is accepted; trailing characters are not.
pub fn parse_integer(token: &str) -> Result<i32, AttemptFailure> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AttemptFailure::Blank);
    }
    token
        .parse::<i32>()
        .map_err(|e| AttemptFailure::NotAnInteger(e.to_string()))
}

/// Prompts on `output` and reads integers from `input`, one line per attempt.
///
/// Every attempt consumes exactly one full line, so text following a
/// rejected (or accepted) token never reaches the next read.
pub struct InputReader<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    /// Enable coloured diagnostics.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Show `prompt`, read one line, and parse its first token.
    ///
    /// Parse and read problems are reported in the returned attempt after
    /// printing the invalid-input diagnostic. Only failures to write the
    /// prompt or diagnostic are returned as `Err`.
    pub fn acquire_integer(&mut self, prompt: &str) -> io::Result<InputAttempt> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let outcome = match self.input.read_line(&mut line) {
            Ok(0) => Err(AttemptFailure::EndOfInput),
            Ok(_) => {
                let mut tokens = line.split_whitespace();
                let first = tokens.next().unwrap_or("");
                let parsed = parse_integer(first);
                if parsed.is_ok() && tokens.next().is_some() {
                    tracing::debug!(line = line.trim_end(), "discarding trailing input");
                }
                parsed
            }
            Err(e) => Err(AttemptFailure::Read(e.to_string())),
        };

        let raw = line.trim_end_matches(['\r', '\n']).to_string();
        match &outcome {
            Ok(value) => tracing::debug!(value, "parsed integer"),
            Err(failure) => {
                tracing::debug!(raw = %raw, %failure, "rejected input");
                // A closed stream leaves the prompt line unterminated.
                if matches!(failure, AttemptFailure::EndOfInput) {
                    writeln!(self.output)?;
                }
                self.diagnostic(INVALID_INPUT_MESSAGE)?;
            }
        }

        Ok(InputAttempt { raw, outcome })
    }

    /// Write one line of dialogue.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Block until one more line (or EOF) arrives, ignoring its content.
    ///
    /// Returns the number of bytes consumed.
    pub fn wait_for_line(&mut self) -> io::Result<usize> {
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(n) => Ok(n),
            // Non UTF-8 bytes still count as the awaited line.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(1),
            Err(e) => Err(e),
        }
    }

    /// Mutable access to the output stream.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Split the reader back into its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn diagnostic(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", message.yellow())
        } else {
            writeln!(self.output, "{}", message)
        }
    }
}
