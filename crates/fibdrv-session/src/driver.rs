//! Scripted seek/read/write sequences over an open session.

use fibdrv_core::constants::MAX_LENGTH;

use crate::interfaces::{ProgressReporter, ReadRecord};
use crate::session::{Session, SessionError, Whence};

/// Seek, read and package the result.
pub fn read_at(
    session: &mut Session<'_>,
    offset: i64,
    whence: Whence,
    buffer_capacity: usize,
) -> Result<ReadRecord, SessionError> {
    let position = session.seek(offset, whence);
    let digits = session.read(buffer_capacity)?;
    Ok(ReadRecord {
        whence,
        position,
        digits: digits.into_iter().map(char::from).collect(),
        duration_ns: session.write(&[]),
        algorithm: session.algorithm().to_string(),
    })
}

/// Issue `count` writes with `payload` and collect the returned durations.
pub fn write_timings(session: &mut Session<'_>, payload: &[u8], count: usize) -> Vec<u64> {
    (0..count).map(|_| session.write(payload)).collect()
}

/// Positions visited by a sweep: `0..=MAX_LENGTH`, then back down to 0.
pub fn sweep_positions() -> impl Iterator<Item = i64> {
    (0..=MAX_LENGTH).chain((0..=MAX_LENGTH).rev())
}

/// Read every index up to `MAX_LENGTH` forward, then backward.
///
/// Stops at the first failing read.
pub fn sweep(
    session: &mut Session<'_>,
    buffer_capacity: usize,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<ReadRecord>, SessionError> {
    #[allow(clippy::cast_sign_loss)]
    let total = 2 * (MAX_LENGTH as u64 + 1);
    let mut records = Vec::new();

    for (done, position) in (1..).zip(sweep_positions()) {
        records.push(read_at(session, position, Whence::Start, buffer_capacity)?);
        reporter.report(done, total);
    }

    reporter.complete();
    tracing::info!(reads = records.len(), "sweep finished");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::device::FibDevice;
    use crate::interfaces::NullProgressReporter;

    struct CountingReporter {
        reports: Cell<u64>,
        completed: Cell<bool>,
    }

    impl ProgressReporter for CountingReporter {
        fn report(&self, done: u64, _total: u64) {
            self.reports.set(done);
        }

        fn complete(&self) {
            self.completed.set(true);
        }
    }

    #[test]
    fn read_at_fills_record() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        let record = read_at(&mut session, 20, Whence::Start, 256).unwrap();
        assert_eq!(record.whence, Whence::Start);
        assert_eq!(record.position, 20);
        assert_eq!(record.digits, "6765");
        assert_eq!(record.algorithm, "FastDoubling");
        assert_eq!(record.duration_ns, session.write(b""));
    }

    #[test]
    fn read_at_clamps() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        let record = read_at(&mut session, -3, Whence::Start, 256).unwrap();
        assert_eq!(record.position, 0);
        assert_eq!(record.digits, "0");
    }

    #[test]
    fn write_timings_before_read() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        assert_eq!(write_timings(&mut session, b"testing writing", 3), vec![0, 0, 0]);
    }

    #[test]
    fn sweep_positions_forward_then_back() {
        let positions: Vec<i64> = sweep_positions().collect();
        assert_eq!(positions.len(), 1002);
        assert_eq!(positions[0], 0);
        assert_eq!(positions[500], MAX_LENGTH);
        assert_eq!(positions[501], MAX_LENGTH);
        assert_eq!(positions[1001], 0);
    }

    #[test]
    fn sweep_reads_everything() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        let reporter = CountingReporter {
            reports: Cell::new(0),
            completed: Cell::new(false),
        };
        let records = sweep(&mut session, 256, &reporter).unwrap();
        assert_eq!(records.len(), 1002);
        assert_eq!(records[10].digits, "55");
        assert_eq!(records[1001].digits, "0");
        assert_eq!(reporter.reports.get(), 1002);
        assert!(reporter.completed.get());
    }

    #[test]
    fn sweep_stops_on_small_buffer() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        let err = sweep(&mut session, 4, &NullProgressReporter).unwrap_err();
        // F(21) = 10946 is the first value with five digits
        assert_eq!(
            err,
            SessionError::BufferTooSmall {
                needed: 5,
                available: 4
            }
        );
        assert_eq!(session.position(), 21);
    }
}
