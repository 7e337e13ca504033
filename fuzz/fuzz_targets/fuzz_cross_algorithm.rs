#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_core::calculator::DigitCalculator;
use fibdrv_core::capacity::capacity_for;
use fibdrv_core::fastdoubling::FastDoubling;
use fibdrv_core::iterative::Iterative;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as k, capped at 2000 for speed
    let k = i64::from(u16::from_le_bytes([data[0], data[1]]) % 2_000);
    let cap = capacity_for(k);

    let fast = FastDoubling::new().compute(k, cap);
    let iterative = Iterative::new().compute(k, cap);
    assert_eq!(fast, iterative, "FastDoubling != Iterative at k={k}");
});
