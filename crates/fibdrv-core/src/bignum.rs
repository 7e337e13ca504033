//! Fixed-capacity decimal big number.
//!
//! Digits are stored little-endian (index 0 is the least significant digit),
//! one decimal digit per byte. The capacity is chosen by the caller before a
//! computation starts and never changes while operators run.

use std::fmt;

use crate::calculator::FibError;

/// A non-negative integer held as exactly `capacity()` decimal digits.
///
/// # Example
/// ```
/// use fibdrv_core::bignum::DecimalBigNum;
///
/// let n = DecimalBigNum::parse(8, "6765").unwrap();
/// assert_eq!(n.capacity(), 8);
/// assert_eq!(n.significant_len(), 4);
/// assert_eq!(n.to_string(), "6765");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalBigNum {
    digits: Vec<u8>,
}

impl DecimalBigNum {
    /// Create an all-zero number with `cap` digit slots.
    ///
    /// A capacity of zero is raised to one so that every value has at least
    /// one digit.
    #[must_use]
    pub fn zero(cap: usize) -> Self {
        Self {
            digits: vec![0; cap.max(1)],
        }
    }

    /// Create a number whose least significant digit is `seed`.
    ///
    /// Used for the F(0) = 0 and F(1) = 1 starting values.
    #[must_use]
    pub fn from_seed(cap: usize, seed: u8) -> Self {
        debug_assert!(seed < 10, "seed must be a single decimal digit");
        let mut n = Self::zero(cap);
        n.digits[0] = seed % 10;
        n
    }

    /// Convert a machine integer.
    pub fn from_u64(cap: usize, mut value: u64) -> Result<Self, FibError> {
        let mut n = Self::zero(cap);
        let capacity = n.capacity();
        let mut i = 0;
        while value != 0 {
            if i == capacity {
                return Err(FibError::CapacityOverflow { capacity });
            }
            #[allow(clippy::cast_possible_truncation)]
            let digit = (value % 10) as u8;
            n.digits[i] = digit;
            value /= 10;
            i += 1;
        }
        Ok(n)
    }

    /// Parse most-significant-first decimal text.
    ///
    /// Leading zeros are accepted and do not count against the capacity.
    pub fn parse(cap: usize, text: &str) -> Result<Self, FibError> {
        let text = text.trim();
        if let Some(c) = text.chars().find(|c| !c.is_ascii_digit()) {
            return Err(FibError::InvalidDigit(c));
        }
        let significant = text.trim_start_matches('0');
        let mut n = Self::zero(cap);
        let capacity = n.capacity();
        if significant.len() > capacity {
            return Err(FibError::CapacityOverflow { capacity });
        }
        for (slot, byte) in n.digits.iter_mut().zip(significant.bytes().rev()) {
            *slot = byte - b'0';
        }
        Ok(n)
    }

    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d < 10));
        if digits.is_empty() {
            return Self::zero(1);
        }
        Self { digits }
    }

    /// Declared number of digit slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Digit slots, least significant first.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub(crate) fn digits_mut(&mut self) -> &mut [u8] {
        &mut self.digits
    }

    /// Digit at position `i` (0 = least significant), or 0 past the capacity.
    #[inline]
    #[must_use]
    pub fn digit(&self, i: usize) -> u8 {
        self.digits.get(i).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Number of digits up to and including the most significant non-zero
    /// one. An all-zero value reports 1.
    #[must_use]
    pub fn significant_len(&self) -> usize {
        self.digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(1, |top| top + 1)
    }

    /// Minimal representation: capacity equals the significant digit count.
    #[must_use]
    pub fn trim(&self) -> Self {
        Self {
            digits: self.digits[..self.significant_len()].to_vec(),
        }
    }

    /// Copy into a new capacity.
    ///
    /// Growing zero-extends. Shrinking fails with `CapacityOverflow` if any
    /// dropped digit is non-zero.
    pub fn resized(&self, cap: usize) -> Result<Self, FibError> {
        let cap = cap.max(1);
        if self.significant_len() > cap {
            return Err(FibError::CapacityOverflow { capacity: cap });
        }
        let mut digits = self.digits.clone();
        digits.resize(cap, 0);
        Ok(Self { digits })
    }

    /// ASCII digits of the trimmed value, most significant first.
    #[must_use]
    pub fn to_ascii(&self) -> Vec<u8> {
        self.digits[..self.significant_len()]
            .iter()
            .rev()
            .map(|&d| d + b'0')
            .collect()
    }
}

impl fmt::Display for DecimalBigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ascii = self.to_ascii();
        // to_ascii only yields b'0'..=b'9'
        f.pad(std::str::from_utf8(&ascii).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for DecimalBigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalBigNum({self}, cap={})", self.capacity())
    }
}
