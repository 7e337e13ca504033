#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_core::constants::MAX_LENGTH;
use fibdrv_session::{FibDevice, SessionError, Whence};

fuzz_target!(|data: &[u8]| {
    let device = FibDevice::new();
    let mut session = device.open().unwrap();

    // Each 10-byte chunk is one seek: whence byte, offset, buffer byte.
    for chunk in data.chunks_exact(10) {
        let Ok(whence) = Whence::try_from(i32::from(chunk[0] % 4)) else {
            continue;
        };
        let mut offset = [0u8; 8];
        offset.copy_from_slice(&chunk[1..9]);
        let position = session.seek(i64::from_le_bytes(offset), whence);
        assert!((0..=MAX_LENGTH).contains(&position));

        match session.read(usize::from(chunk[9])) {
            Ok(digits) => assert!(digits.len() <= usize::from(chunk[9])),
            Err(SessionError::BufferTooSmall { needed, available }) => {
                assert!(needed > available);
            }
            Err(e) => panic!("unexpected read error: {e}"),
        }
        assert!(device.open().is_err());
    }
});
