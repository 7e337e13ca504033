//! The open session: seek, read and write against the shared slot.
//!
//! A `Session` holds the device lock for its whole lifetime. Closing it (or
//! dropping it) releases the device for the next `open()`.

use std::time::Duration;

use parking_lot::MutexGuard;

use fibdrv_core::calculator::{DigitCalculator, FibError};
use fibdrv_core::capacity::capacity_for;
use fibdrv_core::constants::MAX_LENGTH;

use crate::device::DeviceState;

/// Error type for session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Another session currently holds the device.
    #[error("device is busy")]
    Busy,

    /// The digits of the result do not fit the caller's buffer.
    #[error("read buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Raw seek origin other than 0, 1 or 2.
    #[error("invalid seek origin {0}")]
    InvalidWhence(i32),

    /// The engine failed.
    #[error(transparent)]
    Compute(#[from] FibError),
}

/// Origin of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Whence {
    /// `position = offset`
    Start,
    /// `position = position + offset`
    Current,
    /// `position = MAX_LENGTH - offset`
    End,
}

impl TryFrom<i32> for Whence {
    type Error = SessionError;

    /// Map the raw `SEEK_SET`/`SEEK_CUR`/`SEEK_END` codes.
    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Start),
            1 => Ok(Self::Current),
            2 => Ok(Self::End),
            other => Err(SessionError::InvalidWhence(other)),
        }
    }
}

/// Target of a seek before clamping.
fn seek_target(position: i64, offset: i64, whence: Whence) -> i64 {
    match whence {
        Whence::Start => offset,
        Whence::Current => position.saturating_add(offset),
        // Not relative to the end of a stream: MAX_LENGTH minus the raw offset.
        Whence::End => MAX_LENGTH.saturating_sub(offset),
    }
}

/// Exclusive handle on a `FibDevice`.
pub struct Session<'a> {
    state: MutexGuard<'a, DeviceState>,
    calculator: &'a dyn DigitCalculator,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        state: MutexGuard<'a, DeviceState>,
        calculator: &'a dyn DigitCalculator,
    ) -> Self {
        Self { state, calculator }
    }

    /// Release the device.
    pub fn close(self) {
        drop(self);
    }

    /// Current index.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.state.position
    }

    /// Move the position and return it.
    ///
    /// The result is clamped to `[0, MAX_LENGTH]`; out-of-range targets are
    /// not an error.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        let target = seek_target(self.state.position, offset, whence);
        let position = target.clamp(0, MAX_LENGTH);
        if position != target {
            tracing::debug!(target, position, "seek clamped");
        }
        self.state.position = position;
        position
    }

    /// Compute F(position) and return its ASCII digits, most significant
    /// first.
    ///
    /// The duration of the computation is recorded even when the digits do
    /// not fit `buffer_capacity`.
    pub fn read(&mut self, buffer_capacity: usize) -> Result<Vec<u8>, SessionError> {
        let k = self.state.position;
        let cap = capacity_for(k);
        let calculator = self.calculator;

        let digits = self
            .state
            .timing
            .time(|| calculator.compute(k, cap).map(|value| value.to_ascii()))?;

        let elapsed_ns = self.state.timing.last_ns();
        if digits.len() > buffer_capacity {
            tracing::warn!(
                k,
                needed = digits.len(),
                available = buffer_capacity,
                "read buffer too small"
            );
            return Err(SessionError::BufferTooSmall {
                needed: digits.len(),
                available: buffer_capacity,
            });
        }

        tracing::debug!(
            k,
            digits = digits.len(),
            elapsed_ns,
            algorithm = calculator.name(),
            "read"
        );
        Ok(digits)
    }

    /// Read into `buf` and return the number of bytes written.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, SessionError> {
        let digits = self.read(buf.len())?;
        buf[..digits.len()].copy_from_slice(&digits);
        Ok(digits.len())
    }

    /// Timing side channel: the payload is ignored and the duration of the
    /// last read is returned in nanoseconds (0 if nothing was read yet).
    pub fn write(&mut self, payload: &[u8]) -> u64 {
        tracing::trace!(ignored = payload.len(), "write");
        self.state.timing.last_ns()
    }

    /// Duration of the last read, if any.
    #[must_use]
    pub fn last_duration(&self) -> Option<Duration> {
        self.state.timing.last()
    }

    /// Name of the engine serving reads.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.calculator.name()
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        tracing::debug!(position = self.state.position, "session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whence_from_raw_codes() {
        assert_eq!(Whence::try_from(0), Ok(Whence::Start));
        assert_eq!(Whence::try_from(1), Ok(Whence::Current));
        assert_eq!(Whence::try_from(2), Ok(Whence::End));
        assert_eq!(Whence::try_from(3), Err(SessionError::InvalidWhence(3)));
        assert_eq!(Whence::try_from(-1), Err(SessionError::InvalidWhence(-1)));
    }

    #[test]
    fn seek_target_start() {
        assert_eq!(seek_target(42, 7, Whence::Start), 7);
        assert_eq!(seek_target(42, -7, Whence::Start), -7);
    }

    #[test]
    fn seek_target_current() {
        assert_eq!(seek_target(42, 7, Whence::Current), 49);
        assert_eq!(seek_target(42, -50, Whence::Current), -8);
        assert_eq!(seek_target(i64::MAX, 1, Whence::Current), i64::MAX);
    }

    #[test]
    fn seek_target_end_subtracts_offset() {
        assert_eq!(seek_target(0, 10, Whence::End), 490);
        assert_eq!(seek_target(0, -10, Whence::End), 510);
        assert_eq!(seek_target(0, i64::MIN, Whence::End), i64::MAX);
    }

    #[test]
    fn whence_serde_names() {
        let json = serde_json::to_string(&Whence::Current).unwrap();
        assert_eq!(json, "\"current\"");
        let back: Whence = serde_json::from_str("\"end\"").unwrap();
        assert_eq!(back, Whence::End);
    }

    #[test]
    fn session_error_display() {
        assert_eq!(SessionError::Busy.to_string(), "device is busy");
        assert_eq!(
            SessionError::BufferTooSmall {
                needed: 105,
                available: 64
            }
            .to_string(),
            "read buffer too small: need 105 bytes, have 64"
        );
        assert_eq!(
            SessionError::from(FibError::Underflow).to_string(),
            "subtraction underflow"
        );
    }
}
