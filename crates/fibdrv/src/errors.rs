//! Error handling and exit codes.

use fibdrv_core::calculator::FibError;
use fibdrv_core::constants::exit_codes;
use fibdrv_session::SessionError;

/// Exit code for an engine error.
pub fn fib_exit_code(err: &FibError) -> i32 {
    match err {
        FibError::CapacityOverflow { .. } | FibError::CapacityMismatch { .. } => {
            exit_codes::ERROR_CAPACITY
        }
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Underflow | FibError::InvalidDigit(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for a session error.
pub fn session_exit_code(err: &SessionError) -> i32 {
    match err {
        SessionError::Busy => exit_codes::ERROR_BUSY,
        SessionError::BufferTooSmall { .. } => exit_codes::ERROR_CAPACITY,
        SessionError::InvalidWhence(_) => exit_codes::ERROR_CONFIG,
        SessionError::Compute(e) => fib_exit_code(e),
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<SessionError>() {
        session_exit_code(e)
    } else if let Some(e) = err.downcast_ref::<FibError>() {
        fib_exit_code(e)
    } else {
        exit_codes::ERROR_GENERIC
    }
}
