//! Baseline O(k) iteration: F(n) = F(n-1) + F(n-2).

use crate::arith::add;
use crate::bignum::DecimalBigNum;
use crate::calculator::{DigitCalculator, FibError};

/// Add-and-shift calculator over fixed-capacity decimal numbers.
pub struct Iterative;

impl Iterative {
    /// Create a new `Iterative` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitCalculator for Iterative {
    fn compute(&self, k: i64, cap: usize) -> Result<DecimalBigNum, FibError> {
        if k <= 0 {
            return Ok(DecimalBigNum::from_seed(1, 0));
        }

        let mut prev = DecimalBigNum::from_seed(cap, 0);
        let mut curr = DecimalBigNum::from_seed(cap, 1);
        for _ in 1..k {
            let next = add(&prev, &curr)?;
            prev = std::mem::replace(&mut curr, next);
        }
        Ok(curr.trim())
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
