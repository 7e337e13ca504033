//! Digit-wise arithmetic over `DecimalBigNum`.
//!
//! Every binary operator requires both operands to have the same capacity.
//! `add` and `sub` keep that capacity; `mul` produces twice that capacity.
//! The `wrapping_*` forms reproduce fixed-width behaviour (result modulo
//! 10^cap plus the carry or borrow that left the top digit). The plain forms
//! turn that carry or borrow into an error.

use crate::bignum::DecimalBigNum;
use crate::calculator::FibError;

/// Add two digits with carry: a + b + carry -> (digit, `new_carry`)
#[inline]
#[must_use]
pub fn add_digit(a: u8, b: u8, carry: u8) -> (u8, u8) {
    let sum = a + b + carry;
    (sum % 10, sum / 10)
}

/// Subtract two digits with borrow: a - b - borrow -> (digit, `new_borrow`)
#[inline]
#[must_use]
pub fn sub_digit(a: u8, b: u8, borrow: u8) -> (u8, u8) {
    let diff = i16::from(a) - i16::from(b) - i16::from(borrow);
    if diff < 0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let digit = (diff + 10) as u8;
        (digit, 1)
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let digit = diff as u8;
        (digit, 0)
    }
}

fn same_capacity(x: &DecimalBigNum, y: &DecimalBigNum) -> Result<usize, FibError> {
    if x.capacity() == y.capacity() {
        Ok(x.capacity())
    } else {
        Err(FibError::CapacityMismatch {
            left: x.capacity(),
            right: y.capacity(),
        })
    }
}

/// `x + y` modulo 10^cap, returning the carry out of the top digit.
pub fn wrapping_add(
    x: &DecimalBigNum,
    y: &DecimalBigNum,
) -> Result<(DecimalBigNum, u8), FibError> {
    let cap = same_capacity(x, y)?;
    let mut r = DecimalBigNum::zero(cap);
    let mut carry = 0;
    for ((slot, &a), &b) in r.digits_mut().iter_mut().zip(x.digits()).zip(y.digits()) {
        let (digit, c) = add_digit(a, b, carry);
        *slot = digit;
        carry = c;
    }
    Ok((r, carry))
}

/// `x + y`, failing with `CapacityOverflow` if the sum needs another digit.
///
/// # Example
/// ```
/// use fibdrv_core::arith::add;
/// use fibdrv_core::bignum::DecimalBigNum;
///
/// let x = DecimalBigNum::from_u64(3, 377).unwrap();
/// let y = DecimalBigNum::from_u64(3, 610).unwrap();
/// assert_eq!(add(&x, &y).unwrap().to_string(), "987");
/// assert!(add(&x, &x.clone()).is_ok());
/// assert!(add(&y, &y).is_err());
/// ```
pub fn add(x: &DecimalBigNum, y: &DecimalBigNum) -> Result<DecimalBigNum, FibError> {
    match wrapping_add(x, y)? {
        (r, 0) => Ok(r),
        (r, _) => Err(FibError::CapacityOverflow {
            capacity: r.capacity(),
        }),
    }
}

/// `2 * x`, same capacity as `x`.
pub fn double(x: &DecimalBigNum) -> Result<DecimalBigNum, FibError> {
    add(x, x)
}

/// `x - y` modulo 10^cap, returning the borrow out of the top digit.
///
/// A non-zero borrow means `x < y` and the digits hold `10^cap + x - y`.
pub fn wrapping_sub(
    x: &DecimalBigNum,
    y: &DecimalBigNum,
) -> Result<(DecimalBigNum, u8), FibError> {
    let cap = same_capacity(x, y)?;
    let mut r = DecimalBigNum::zero(cap);
    let mut borrow = 0;
    for ((slot, &a), &b) in r.digits_mut().iter_mut().zip(x.digits()).zip(y.digits()) {
        let (digit, bw) = sub_digit(a, b, borrow);
        *slot = digit;
        borrow = bw;
    }
    Ok((r, borrow))
}

/// `x - y`, failing with `Underflow` when `x < y`.
pub fn sub(x: &DecimalBigNum, y: &DecimalBigNum) -> Result<DecimalBigNum, FibError> {
    match wrapping_sub(x, y)? {
        (r, 0) => Ok(r),
        _ => Err(FibError::Underflow),
    }
}

/// Schoolbook `x * y` into `2 * cap` digits.
///
/// Partial products accumulate undigested in a `u64` scratch row; a single
/// carry pass then normalizes every position to 0..=9.
pub fn mul(x: &DecimalBigNum, y: &DecimalBigNum) -> Result<DecimalBigNum, FibError> {
    let cap = same_capacity(x, y)?;
    let mut temp = vec![0u64; 2 * cap];

    for (i, &a) in x.digits().iter().enumerate() {
        if a == 0 {
            continue;
        }
        for (j, &b) in y.digits().iter().enumerate() {
            temp[i + j] += u64::from(a) * u64::from(b);
        }
    }

    let mut carry = 0u64;
    let digits = temp
        .into_iter()
        .map(|t| {
            let v = t + carry;
            carry = v / 10;
            #[allow(clippy::cast_possible_truncation)]
            let digit = (v % 10) as u8;
            digit
        })
        .collect();
    // cap digits times cap digits always fits in 2 * cap digits
    debug_assert_eq!(carry, 0);

    Ok(DecimalBigNum::from_digits(digits))
}
