//! Digit capacity estimation.
//!
//! `log2 F(k) <= k * log2(φ)`, so F(k) has at most `k * log10(φ) + 1`
//! decimal digits. Engines size every working value from this bound before
//! they start; nothing grows mid-computation.

use crate::constants::{CAPACITY_HEADROOM, LOG10_PHI};

/// Number of binary digits needed to represent `k` (0 for `k <= 0`).
#[must_use]
pub fn bit_length(k: i64) -> u32 {
    if k <= 0 {
        0
    } else {
        i64::BITS - k.leading_zeros()
    }
}

/// Digit capacity large enough for F(k) and every intermediate of the
/// doubling and iterative engines.
///
/// # Example
/// ```
/// use fibdrv_core::capacity::capacity_for;
///
/// // F(500) has 105 digits
/// assert!(capacity_for(500) >= 106);
/// assert_eq!(capacity_for(0), capacity_for(-3));
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn capacity_for(k: i64) -> usize {
    let k = k.max(0);
    let estimate = (k as f64 * LOG10_PHI).ceil() as usize;
    estimate + CAPACITY_HEADROOM
}
