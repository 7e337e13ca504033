//! Presentation interfaces for scripted session runs.

use serde::{Deserialize, Serialize};

use crate::session::Whence;

/// Result of a single read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadRecord {
    /// Origin of the seek that led to this read.
    pub whence: Whence,
    /// Index that was read.
    pub position: i64,
    /// Decimal digits of F(position), most significant first.
    pub digits: String,
    /// Duration of the computation in nanoseconds.
    pub duration_ns: u64,
    /// Engine that produced the value.
    pub algorithm: String,
}

/// Trait for reporting progress to the user.
pub trait ProgressReporter {
    /// Report that `done` of `total` reads have finished.
    fn report(&self, done: u64, total: u64);

    /// Report completion.
    fn complete(&self);
}

/// Trait for presenting session results to the user.
pub trait ReadPresenter {
    /// Present a read.
    fn present_read(&self, record: &ReadRecord);

    /// Present the value returned by the `index`-th write.
    fn present_write(&self, index: usize, duration_ns: u64);
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _done: u64, _total: u64) {}
    fn complete(&self) {}
}
