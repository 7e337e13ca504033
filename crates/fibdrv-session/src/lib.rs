//! # fibdrv-session
//!
//! Single-client, position-addressed access to the Fibonacci engines:
//! exclusive open, seek, read of F(position) as decimal digits, and a write
//! that reports the duration of the last read.

pub mod device;
pub mod driver;
pub mod interfaces;
pub mod session;
pub mod timing;

pub use device::FibDevice;
pub use interfaces::{ProgressReporter, ReadPresenter, ReadRecord};
pub use session::{Session, SessionError, Whence};
