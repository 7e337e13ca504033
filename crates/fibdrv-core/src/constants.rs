//! Constants shared by the engines and the session layer.

/// Largest index a session position may hold. Seek targets are clamped to
/// `[0, MAX_LENGTH]`.
pub const MAX_LENGTH: i64 = 500;

/// Default read buffer size used by the command-line client.
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// `log10(φ)` where φ is the golden ratio.
pub const LOG10_PHI: f64 = 0.208_987_640_249_978_73;

/// Extra digit slots on top of the estimated length of F(k).
///
/// Covers the rounding in the estimate and the `2 * F(n+1)` intermediate of
/// the doubling step.
pub const CAPACITY_HEADROOM: usize = 2;

/// Precomputed Fibonacci values for n = 0..=93.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes for the command-line client.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The device already has an open session.
    pub const ERROR_BUSY: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// A value did not fit its digit capacity or the read buffer.
    pub const ERROR_CAPACITY: i32 = 5;
}
