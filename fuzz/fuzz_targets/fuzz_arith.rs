#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdrv_core::arith::{add, mul, sub};
use fibdrv_core::bignum::DecimalBigNum;
use fibdrv_core::calculator::FibError;

fn to_biguint(n: &DecimalBigNum) -> BigUint {
    BigUint::parse_bytes(&n.to_ascii(), 10).unwrap()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Split the input in two halves of decimal digits, one byte per digit.
    let half = data.len() / 2;
    let cap = half.clamp(1, 64);
    let digits = |bytes: &[u8]| -> String {
        bytes
            .iter()
            .take(cap)
            .map(|b| char::from(b'0' + b % 10))
            .collect()
    };
    let x = DecimalBigNum::parse(cap, &digits(&data[..half])).unwrap();
    let y = DecimalBigNum::parse(cap, &digits(&data[half..])).unwrap();
    let (bx, by) = (to_biguint(&x), to_biguint(&y));

    match add(&x, &y) {
        Ok(sum) => assert_eq!(to_biguint(&sum), &bx + &by),
        Err(FibError::CapacityOverflow { .. }) => {
            assert!((&bx + &by).to_string().len() > cap);
        }
        Err(e) => panic!("unexpected add error: {e}"),
    }

    match sub(&x, &y) {
        Ok(diff) => assert_eq!(to_biguint(&diff), &bx - &by),
        Err(FibError::Underflow) => assert!(bx < by),
        Err(e) => panic!("unexpected sub error: {e}"),
    }

    assert_eq!(to_biguint(&mul(&x, &y).unwrap()), &bx * &by);
});
