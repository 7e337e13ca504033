//! # fibdrv-core
//!
//! Decimal-digit arbitrary-precision arithmetic and the Fibonacci engines
//! built on it: iterative Fast Doubling and the O(k) baseline.

pub mod arith;
pub mod bignum;
pub mod calculator;
pub mod capacity;
pub mod constants;
pub mod fastdoubling;
pub mod iterative;
pub mod options;
pub mod registry;

// Re-exports
pub use bignum::DecimalBigNum;
pub use calculator::{DigitCalculator, FibError};
pub use capacity::capacity_for;
pub use constants::{exit_codes, FIB_TABLE, MAX_LENGTH};
pub use options::Options;
pub use registry::{CalculatorFactory, DefaultFactory};

/// Compute F(k) with fast doubling and a capacity sized from `k`.
///
/// # Example
/// ```
/// assert_eq!(fibdrv_core::fibonacci(10).unwrap().to_string(), "55");
/// assert_eq!(fibdrv_core::fibonacci(0).unwrap().to_string(), "0");
/// ```
pub fn fibonacci(k: i64) -> Result<DecimalBigNum, FibError> {
    fastdoubling::FastDoubling::new().compute(k, capacity_for(k))
}
