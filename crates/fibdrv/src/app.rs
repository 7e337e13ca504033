//! Application entry point and dispatch.

use anyhow::{Context, Result};

use fibdrv_cli::output::write_to_file;
use fibdrv_cli::presenter::{CLIReadPresenter, OutputMode};
use fibdrv_cli::progress::CLIProgressReporter;
use fibdrv_cli::ui::print_header;
use fibdrv_core::registry::DefaultFactory;
use fibdrv_session::driver::{read_at, sweep, sweep_positions, write_timings};
use fibdrv_session::interfaces::{ReadPresenter, ReadRecord};
use fibdrv_session::FibDevice;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibdrv_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let opts = config.options();
    let factory = DefaultFactory::new();
    let device = FibDevice::with_options(&opts, &factory)?;
    let mut session = device.open()?;

    let mode = if config.json {
        OutputMode::Json
    } else if config.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Text
    };
    let presenter = CLIReadPresenter::new(mode, config.verbose);
    if config.verbose && mode == OutputMode::Text {
        print_header(session.algorithm());
    }

    for (i, ns) in write_timings(&mut session, config.payload.as_bytes(), config.writes)
        .into_iter()
        .enumerate()
    {
        presenter.present_write(i, ns);
    }

    let records: Vec<ReadRecord> = if config.sweep {
        let total = sweep_positions().count() as u64;
        let reporter = CLIProgressReporter::new(total, mode != OutputMode::Text);
        sweep(&mut session, opts.buffer_capacity, &reporter)?
    } else {
        vec![read_at(
            &mut session,
            config.index,
            config.whence.into(),
            opts.buffer_capacity,
        )?]
    };
    session.close();

    for record in &records {
        presenter.present_read(record);
    }

    if let Some(ref path) = config.output {
        if let Some(last) = records.last() {
            write_to_file(path, &last.digits)
                .with_context(|| format!("failed to write {path}"))?;
        }
    }

    Ok(())
}
