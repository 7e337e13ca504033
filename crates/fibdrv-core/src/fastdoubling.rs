//! Fast Doubling over fixed-capacity decimal numbers.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates from MSB to LSB of the index. Every pair value stays at the
//! caller's capacity; products are computed at twice the capacity and
//! narrowed back with an overflow check.

use crate::arith::{add, double, mul, sub};
use crate::bignum::DecimalBigNum;
use crate::calculator::{DigitCalculator, FibError};
use crate::capacity::bit_length;

/// Fast Doubling calculator: O(log k) big-number operations.
///
/// # Example
/// ```
/// use fibdrv_core::calculator::DigitCalculator;
/// use fibdrv_core::capacity::capacity_for;
/// use fibdrv_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// let f100 = calc.compute(100, capacity_for(100)).unwrap();
/// assert_eq!(f100.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Execute the doubling loop for `k >= 2`.
    fn execute_doubling_loop(k: i64, cap: usize) -> Result<DecimalBigNum, FibError> {
        let num_bits = bit_length(k);
        let mut fk = DecimalBigNum::from_seed(cap, 0);
        let mut fk1 = DecimalBigNum::from_seed(cap, 1);

        for i in (0..num_bits).rev() {
            // t = 2 * F(k+1) - F(k)
            let t = sub(&double(&fk1)?, &fk)?;
            let f2k = mul(&fk, &t)?.resized(cap)?;

            let fk_sq = mul(&fk, &fk)?.resized(cap)?;
            let fk1_sq = mul(&fk1, &fk1)?.resized(cap)?;
            let f2k1 = add(&fk_sq, &fk1_sq)?;

            fk = f2k;
            fk1 = f2k1;

            if (k >> i) & 1 == 1 {
                // (F(2k), F(2k+1)) -> (F(2k+1), F(2k+2))
                let next = add(&fk, &fk1)?;
                fk = std::mem::replace(&mut fk1, next);
            }

            tracing::trace!(bit = i, digits = fk.significant_len(), "doubling step");
        }

        Ok(fk)
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitCalculator for FastDoubling {
    fn compute(&self, k: i64, cap: usize) -> Result<DecimalBigNum, FibError> {
        match k {
            i64::MIN..=0 => Ok(DecimalBigNum::from_seed(1, 0)),
            1 => Ok(DecimalBigNum::from_seed(1, 1)),
            _ => Ok(Self::execute_doubling_loop(k, cap)?.trim()),
        }
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
