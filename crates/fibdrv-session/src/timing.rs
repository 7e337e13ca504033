//! Duration of the most recent computation.

use std::time::{Duration, Instant};

/// Records how long the last timed call took.
///
/// # Example
/// ```
/// use fibdrv_session::timing::TimingRecorder;
///
/// let mut timing = TimingRecorder::new();
/// assert_eq!(timing.last_ns(), 0);
/// let sum = timing.time(|| 2 + 2);
/// assert_eq!(sum, 4);
/// assert!(timing.last().is_some());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TimingRecorder {
    last: Option<Duration>,
}

impl TimingRecorder {
    /// Create a recorder with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Run `f` and record its monotonic duration.
    pub fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.last = Some(start.elapsed());
        out
    }

    /// Duration of the last timed call, if any.
    #[must_use]
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    /// Last duration in nanoseconds; 0 before the first timed call.
    #[must_use]
    pub fn last_ns(&self) -> u64 {
        self.last
            .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }
}
