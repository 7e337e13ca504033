//! Calculator trait and the shared error type.
//!
//! `DigitCalculator` is implemented by every engine that produces F(k) as a
//! trimmed `DecimalBigNum`. Engines receive the digit capacity from the
//! caller and never grow it.

use crate::bignum::DecimalBigNum;

/// Error type for decimal arithmetic and Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A value needed more digits than the declared capacity.
    #[error("capacity overflow: value does not fit in {capacity} digits")]
    CapacityOverflow { capacity: usize },

    /// Operands of a binary operator had different capacities.
    #[error("capacity mismatch: {left} digits vs {right} digits")]
    CapacityMismatch { left: usize, right: usize },

    /// Subtraction with a subtrahend larger than the minuend.
    #[error("subtraction underflow")]
    Underflow,

    /// Decimal text contained a non-digit character.
    #[error("invalid decimal digit {0:?}")]
    InvalidDigit(char),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Engine producing F(k) in decimal.
pub trait DigitCalculator: Send + Sync {
    /// Compute F(k) using `cap` digit slots for every intermediate value.
    ///
    /// Negative `k` is treated as 0. The result is trimmed.
    fn compute(&self, k: i64, cap: usize) -> Result<DecimalBigNum, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}
