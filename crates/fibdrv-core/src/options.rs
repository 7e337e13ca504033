//! Read options.

use crate::constants::DEFAULT_BUFFER_CAPACITY;

/// Default calculator name.
pub const DEFAULT_ALGORITHM: &str = "fast";

/// Options applied to every read of a device.
#[derive(Debug, Clone)]
pub struct Options {
    /// Calculator name understood by the registry.
    pub algorithm: String,
    /// Buffer capacity assumed when the caller does not pass one.
    pub buffer_capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are empty or zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.algorithm.trim().is_empty() {
            self.algorithm = DEFAULT_ALGORITHM.to_string();
        } else {
            self.algorithm = self.algorithm.trim().to_ascii_lowercase();
        }
        if self.buffer_capacity == 0 {
            self.buffer_capacity = DEFAULT_BUFFER_CAPACITY;
        }
        self
    }
}
