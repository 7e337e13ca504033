//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use fibdrv_core::constants::DEFAULT_BUFFER_CAPACITY;
use fibdrv_core::options::{Options, DEFAULT_ALGORITHM};
use fibdrv_session::Whence;

/// Seek origin as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WhenceArg {
    /// Seek to the index itself.
    Start,
    /// Seek relative to the current position.
    Current,
    /// Seek to MAX_LENGTH minus the index.
    End,
}

impl From<WhenceArg> for Whence {
    fn from(arg: WhenceArg) -> Self {
        match arg {
            WhenceArg::Start => Self::Start,
            WhenceArg::Current => Self::Current,
            WhenceArg::End => Self::End,
        }
    }
}

/// fibdrv — exact Fibonacci numbers through a single-client session.
#[derive(Parser, Debug)]
#[command(name = "fibdrv", version, about)]
pub struct AppConfig {
    /// Seek offset (the Fibonacci index for `--whence start`).
    #[arg(
        short = 'n',
        long,
        default_value = "0",
        env = "FIBDRV_INDEX",
        allow_negative_numbers = true
    )]
    pub index: i64,

    /// Seek origin.
    #[arg(long, value_enum, default_value_t = WhenceArg::Start)]
    pub whence: WhenceArg,

    /// Read buffer capacity in bytes.
    #[arg(short, long, default_value_t = DEFAULT_BUFFER_CAPACITY, env = "FIBDRV_BUFFER")]
    pub buffer: usize,

    /// Algorithm to use: fast or iterative.
    #[arg(long, default_value = DEFAULT_ALGORITHM)]
    pub algo: String,

    /// Read every index from 0 to MAX_LENGTH and back.
    #[arg(long)]
    pub sweep: bool,

    /// Issue this many writes first and print the durations they return.
    #[arg(long, default_value = "0")]
    pub writes: usize,

    /// Payload sent with each write (ignored by the device).
    #[arg(long, default_value = "testing writing")]
    pub payload: String,

    /// Verbose output (full digits, engine and timing).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the digits).
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit one JSON object per read.
    #[arg(long)]
    pub json: bool,

    /// Write the last value read to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options for the device.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            algorithm: self.algo.clone(),
            buffer_capacity: self.buffer,
        }
        .normalize()
    }
}
