//! Progress bar for sweeps.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use fibdrv_session::interfaces::ProgressReporter;

/// Progress reporter drawing an `indicatif` bar on stderr.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// Create a bar for `total` reads. A hidden bar is used when `quiet`.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new(total)
        };
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} reads")
        {
            bar.set_style(style);
        }
        Self { bar }
    }

    /// Current position of the bar.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn report(&self, done: u64, _total: u64) {
        self.bar.set_position(done);
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}
