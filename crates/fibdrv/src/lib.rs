//! fibdrv library — application logic for the command-line client.

pub mod app;
pub mod config;
pub mod errors;
