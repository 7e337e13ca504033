//! Cross-thread exclusivity and seek properties of a shared device.

use std::sync::{Arc, Barrier};
use std::thread;

use proptest::prelude::*;

use fibdrv_core::constants::MAX_LENGTH;
use fibdrv_session::{FibDevice, SessionError, Whence};

#[test]
fn open_from_another_thread_is_busy() {
    let device = FibDevice::new();
    let session = device.open().unwrap();

    thread::scope(|s| {
        let result = s.spawn(|| device.open().err()).join().unwrap();
        assert_eq!(result, Some(SessionError::Busy));
    });

    session.close();

    thread::scope(|s| {
        let opened = s.spawn(|| device.open().is_ok()).join().unwrap();
        assert!(opened);
    });
}

#[test]
fn only_one_of_many_contenders_wins() {
    let device = Arc::new(FibDevice::new());
    let holders = 8;
    let barrier = Arc::new(Barrier::new(holders));
    let release = Arc::new(Barrier::new(holders));

    let handles: Vec<_> = (0..holders)
        .map(|_| {
            let device = Arc::clone(&device);
            let barrier = Arc::clone(&barrier);
            let release = Arc::clone(&release);
            thread::spawn(move || {
                barrier.wait();
                let session = device.open();
                let won = session.is_ok();
                // Keep the winner's session open until every thread has tried.
                release.wait();
                drop(session);
                won
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&won| won)
        .count();
    assert_eq!(winners, 1);
    assert!(!device.is_open());
}

#[test]
fn busy_open_leaves_holder_untouched() {
    let device = FibDevice::new();
    let mut session = device.open().unwrap();
    session.seek(12, Whence::Start);
    assert!(matches!(device.open(), Err(SessionError::Busy)));
    assert_eq!(session.position(), 12);
    assert_eq!(session.read(256).unwrap(), b"144");
}

#[test]
fn clients_retry_until_free() {
    let device = Arc::new(FibDevice::new());
    let workers: Vec<_> = (0..4i64)
        .map(|i| {
            let device = Arc::clone(&device);
            thread::spawn(move || loop {
                match device.open() {
                    Ok(mut session) => {
                        session.seek(10 + i, Whence::Start);
                        return String::from_utf8(session.read(256).unwrap()).unwrap();
                    }
                    Err(SessionError::Busy) => thread::yield_now(),
                    Err(e) => panic!("unexpected error: {e}"),
                }
            })
        })
        .collect();

    let values: Vec<String> = workers.into_iter().map(|w| w.join().unwrap()).collect();
    assert_eq!(values, vec!["55", "89", "144", "233"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every seek lands inside [0, MAX_LENGTH].
    #[test]
    fn seek_always_clamped(start in any::<i64>(), offset in any::<i64>(), raw in 0i32..3) {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        session.seek(start, Whence::Start);
        let whence = Whence::try_from(raw).unwrap();
        let position = session.seek(offset, whence);
        prop_assert!((0..=MAX_LENGTH).contains(&position));
        prop_assert_eq!(position, session.position());
    }

    /// In-range Start seeks are exact.
    #[test]
    fn seek_start_in_range_is_exact(k in 0i64..=MAX_LENGTH) {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        prop_assert_eq!(session.seek(k, Whence::Start), k);
        prop_assert_eq!(session.seek(k, Whence::End), MAX_LENGTH - k);
    }
}
