//! Overflow-safe addition.
//!
//! Sums that leave the `i32` range are clamped to the nearest bound instead
//! of wrapping or panicking. The caller decides how to surface the clamp;
//! [`Sum::diagnostic`] gives the message to print.

use serde::Serialize;

/// Direction in which a sum left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// True sum was above `i32::MAX`
    Positive,
    /// True sum was below `i32::MIN`
    Negative,
}

/// Result of a saturating addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sum {
    value: i32,
    overflow: Option<Overflow>,
}

impl Sum {
    /// The (possibly clamped) sum.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Direction of the clamp, if one happened.
    pub fn overflow(&self) -> Option<Overflow> {
        self.overflow
    }

    /// Whether the value was clamped.
    pub fn is_saturated(&self) -> bool {
        self.overflow.is_some()
    }

    /// Message to emit on the error stream when the value was clamped.
    pub fn diagnostic(&self) -> Option<&'static str> {
        self.overflow.map(|_| "Integer overflow detected!")
    }
}

/// Adds `i32` values, saturating in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaturatingAdder;

impl SaturatingAdder {
    pub fn new() -> Self {
        Self
    }

    /// Add `a` and `b`.
    ///
    /// Returns the exact sum when it fits, otherwise `i32::MAX` or
    /// `i32::MIN` tagged with the overflow direction.
    pub fn add(&self, a: i32, b: i32) -> Sum {
        match a.checked_add(b) {
            Some(value) => Sum {
                value,
                overflow: None,
            },
            // checked_add only fails when both operands share a sign
            None if b > 0 => {
                tracing::warn!(a, b, "sum above i32::MAX, clamping");
                Sum {
                    value: i32::MAX,
                    overflow: Some(Overflow::Positive),
                }
            }
            None => {
                tracing::warn!(a, b, "sum below i32::MIN, clamping");
                Sum {
                    value: i32::MIN,
                    overflow: Some(Overflow::Negative),
                }
            }
        }
    }
}

/// Shorthand for [`SaturatingAdder::add`].
pub fn add(a: i32, b: i32) -> Sum {
    SaturatingAdder.add(a, b)
}
