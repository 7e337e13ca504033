//! CLI read presenter.

use std::time::Duration;

use fibdrv_session::interfaces::{ReadPresenter, ReadRecord};

use crate::output::{format_digits, format_duration, format_number};

/// How reads are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable lines.
    Text,
    /// Digits only.
    Quiet,
    /// One JSON object per line.
    Json,
}

/// CLI read presenter.
pub struct CLIReadPresenter {
    mode: OutputMode,
    verbose: bool,
}

impl CLIReadPresenter {
    #[must_use]
    pub fn new(mode: OutputMode, verbose: bool) -> Self {
        Self { mode, verbose }
    }

    /// Render a read as the line `present_read` prints.
    #[must_use]
    pub fn render_read(&self, record: &ReadRecord) -> String {
        match self.mode {
            OutputMode::Quiet => record.digits.clone(),
            OutputMode::Json => serde_json::to_string(record)
                .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}")),
            OutputMode::Text => {
                let mut line = format!(
                    "Reading from fibdrv at offset {}, returned the sequence {}.",
                    record.position,
                    format_digits(&record.digits, self.verbose)
                );
                if self.verbose {
                    line.push_str(&format!(
                        " [{} in {}]",
                        record.algorithm,
                        format_duration(Duration::from_nanos(record.duration_ns))
                    ));
                }
                line
            }
        }
    }

    /// Render the result of a write.
    #[must_use]
    pub fn render_write(&self, index: usize, duration_ns: u64) -> String {
        match self.mode {
            OutputMode::Quiet => duration_ns.to_string(),
            OutputMode::Json => serde_json::json!({
                "write": index,
                "duration_ns": duration_ns,
            })
            .to_string(),
            OutputMode::Text => format!(
                "Writing to fibdrv, returned the sequence {} ({} ns)",
                duration_ns,
                format_number(duration_ns)
            ),
        }
    }
}

impl ReadPresenter for CLIReadPresenter {
    fn present_read(&self, record: &ReadRecord) {
        println!("{}", self.render_read(record));
    }

    fn present_write(&self, index: usize, duration_ns: u64) {
        println!("{}", self.render_write(index, duration_ns));
    }
}
