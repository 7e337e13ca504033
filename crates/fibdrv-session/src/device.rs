//! The shared computation slot.
//!
//! A `FibDevice` owns the session record (position and last duration) behind
//! a mutex. `open()` takes the mutex without blocking; the returned `Session`
//! keeps it until closed.

use std::sync::Arc;

use parking_lot::Mutex;

use fibdrv_core::calculator::DigitCalculator;
use fibdrv_core::fastdoubling::FastDoubling;
use fibdrv_core::options::Options;
use fibdrv_core::registry::CalculatorFactory;

use crate::session::{Session, SessionError};
use crate::timing::TimingRecorder;

/// Session record guarded by the device mutex.
#[derive(Debug, Default)]
pub(crate) struct DeviceState {
    pub(crate) position: i64,
    pub(crate) timing: TimingRecorder,
}

/// Single-client Fibonacci device.
///
/// # Example
/// ```
/// use fibdrv_session::{FibDevice, SessionError, Whence};
///
/// let device = FibDevice::new();
/// let mut session = device.open().unwrap();
/// assert!(matches!(device.open(), Err(SessionError::Busy)));
///
/// session.seek(10, Whence::Start);
/// assert_eq!(session.read(256).unwrap(), b"55");
/// session.close();
///
/// assert!(device.open().is_ok());
/// ```
pub struct FibDevice {
    state: Mutex<DeviceState>,
    calculator: Arc<dyn DigitCalculator>,
}

impl FibDevice {
    /// Create a closed device at position 0 backed by fast doubling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Arc::new(FastDoubling::new()))
    }

    /// Create a closed device backed by the given engine.
    #[must_use]
    pub fn with_calculator(calculator: Arc<dyn DigitCalculator>) -> Self {
        Self {
            state: Mutex::new(DeviceState::default()),
            calculator,
        }
    }

    /// Create a device using the engine named in `opts`.
    pub fn with_options(
        opts: &Options,
        factory: &dyn CalculatorFactory,
    ) -> Result<Self, SessionError> {
        let calculator = factory.get(&opts.algorithm)?;
        Ok(Self::with_calculator(calculator))
    }

    /// Acquire the device.
    ///
    /// Never blocks: fails with `Busy` while another session is open.
    pub fn open(&self) -> Result<Session<'_>, SessionError> {
        let Some(state) = self.state.try_lock() else {
            tracing::warn!("fibdrv is in use");
            return Err(SessionError::Busy);
        };
        tracing::debug!(position = state.position, "session opened");
        Ok(Session::new(state, self.calculator.as_ref()))
    }

    /// Whether a session currently holds the device.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_locked()
    }

    /// Name of the engine serving reads.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.calculator.name()
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}
