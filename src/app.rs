//! Run orchestration: pick the input path, add, report.

use std::io::{BufRead, Write};

use crate::arith::{SaturatingAdder, Sum};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult, Operand};
use crate::input::{acquire_with_retry, AcquisitionState, InputReader, RetryBudget};
use crate::ui::Presentation;

/// Where the two operands come from. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Both operands were given on the command line
    Args { a: String, b: String },
    /// Operands are read from the input stream
    Interactive,
}

impl InputSource {
    /// Select the source from positional operands.
    ///
    /// Two or more operands use the first two; fewer fall back to
    /// interactive input.
    pub fn from_operands<S: AsRef<str>>(operands: &[S]) -> Self {
        match operands {
            [a, b, rest @ ..] => {
                if !rest.is_empty() {
                    tracing::warn!(ignored = rest.len(), "ignoring extra operands");
                }
                InputSource::Args {
                    a: a.as_ref().to_string(),
                    b: b.as_ref().to_string(),
                }
            }
            _ => InputSource::Interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, InputSource::Interactive)
    }
}

/// A completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub a: i32,
    pub b: i32,
    pub sum: Sum,
}

impl Outcome {
    /// The `a+b=c` result line.
    pub fn equation(&self) -> String {
        format!("{}+{}={}", self.a, self.b, self.sum.value())
    }
}

/// Parse one command-line operand.
pub fn parse_argument(operand: Operand, raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| AppError::MalformedArgument {
            operand,
            raw: raw.to_string(),
            reason: e.to_string(),
        })
}

/// The program: banner, operands, sum, result.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    adder: SaturatingAdder,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            adder: SaturatingAdder::new(),
        }
    }

    /// Execute one run.
    ///
    /// Dialogue goes to `output`, the overflow diagnostic to `errors`.
    /// Terminal failures are returned without printing a sum; the caller
    /// reports them and maps them to an exit code.
    pub fn run<P, R, W, E>(
        &self,
        source: InputSource,
        presenter: &mut P,
        input: R,
        output: W,
        errors: &mut E,
    ) -> AppResult<Outcome>
    where
        P: Presentation + ?Sized,
        R: BufRead,
        W: Write,
        E: Write,
    {
        presenter.show_banner()?;

        let mut console = InputReader::new(input, output).with_color(self.config.color);
        let (a, b) = match &source {
            InputSource::Args { a, b } => {
                tracing::info!("using command-line operands");
                (parse_argument(Operand::A, a)?, parse_argument(Operand::B, b)?)
            }
            InputSource::Interactive => {
                tracing::info!(retry_budget = self.config.retry_budget, "reading operands interactively");
                let a = self.acquire(&mut console, Operand::A)?;
                let b = self.acquire(&mut console, Operand::B)?;
                (a, b)
            }
        };

        tracing::info!(a, b, "adding operands");
        let sum = self.adder.add(a, b);
        if let Some(message) = sum.diagnostic() {
            writeln!(errors, "{}", message)?;
            errors.flush()?;
        }
        tracing::info!(result = sum.value(), saturated = sum.is_saturated(), "sum computed");

        let outcome = Outcome { a, b, sum };
        console.say("Output:")?;
        console.say(&outcome.equation())?;
        console.say("Program ending.")?;

        if source.is_interactive() && self.config.pause_on_exit {
            console.say("Press ENTER to continue...")?;
            console.wait_for_line()?;
        }
        console.output_mut().flush()?;

        Ok(outcome)
    }

    fn acquire<R: BufRead, W: Write>(
        &self,
        console: &mut InputReader<R, W>,
        operand: Operand,
    ) -> AppResult<i32> {
        let mut budget = RetryBudget::new(self.config.retry_budget);
        match acquire_with_retry(console, operand, &mut budget)? {
            AcquisitionState::Acquired(value) => Ok(value),
            _ => Err(AppError::RetryExhausted {
                operand,
                attempts: budget.initial(),
            }),
        }
    }
}
