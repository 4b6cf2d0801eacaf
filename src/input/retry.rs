//! Retry-bounded acquisition of one operand.

use std::io::{self, BufRead, Write};

use super::reader::InputReader;
use crate::error::Operand;
use crate::ui::SEPARATOR;

/// Counter of invalid attempts still permitted for one acquisition.
///
/// Never goes below zero; once it reaches zero the acquisition is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    initial: u32,
    remaining: u32,
}

impl RetryBudget {
    pub fn new(attempts: u32) -> Self {
        Self {
            initial: attempts,
            remaining: attempts,
        }
    }

    /// Attempts the budget started with.
    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// State before any further attempt is made.
    pub fn state(&self) -> AcquisitionState {
        if self.is_exhausted() {
            AcquisitionState::Exhausted
        } else {
            AcquisitionState::Awaiting {
                remaining: self.remaining,
            }
        }
    }

    /// Feed the outcome of one attempt and return the next state.
    ///
    /// A success does not consume budget.
    pub fn record(&mut self, parsed: Option<i32>) -> AcquisitionState {
        match parsed {
            Some(value) if !self.is_exhausted() => AcquisitionState::Acquired(value),
            Some(_) => AcquisitionState::Exhausted,
            None => {
                self.remaining = self.remaining.saturating_sub(1);
                self.state()
            }
        }
    }
}

/// Per-operand acquisition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionState {
    /// Waiting for input with attempts left
    Awaiting { remaining: u32 },
    /// A valid integer was read
    Acquired(i32),
    /// Every attempt failed
    Exhausted,
}

impl AcquisitionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AcquisitionState::Awaiting { .. })
    }
}

/// Prompt for `operand` until a valid integer arrives or `budget` runs out.
///
/// Returns [`AcquisitionState::Acquired`] or [`AcquisitionState::Exhausted`];
/// `budget` is left showing how many attempts remain.
pub fn acquire_with_retry<R: BufRead, W: Write>(
    reader: &mut InputReader<R, W>,
    operand: Operand,
    budget: &mut RetryBudget,
) -> io::Result<AcquisitionState> {
    let prompt = format!("Enter value for {}: ", operand);
    let mut state = budget.state();

    while let AcquisitionState::Awaiting { remaining } = state {
        reader.say(&format!("Retries remaining: {}", remaining))?;
        let attempt = reader.acquire_integer(&prompt)?;
        state = budget.record(attempt.value());

        match state {
            AcquisitionState::Acquired(value) => {
                tracing::debug!(%operand, value, remaining = budget.remaining(), "operand acquired");
                reader.say(&format!("Got valid {}: {}", operand, value))?;
            }
            _ => {
                tracing::debug!(%operand, remaining = budget.remaining(), "attempt rejected");
                reader.say(SEPARATOR)?;
            }
        }
    }

    if state == AcquisitionState::Exhausted {
        tracing::warn!(%operand, attempts = budget.initial(), "retry budget exhausted");
    }
    Ok(state)
}
