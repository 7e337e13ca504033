//! fibdrv — read Fibonacci numbers through an exclusive device session.

use fibdrv_core::constants::exit_codes;
use fibdrv_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        let code = errors::exit_code(&err);
        fibdrv_cli::ui::print_error(&format!("{err:#}"), code == exit_codes::ERROR_BUSY);
        std::process::exit(code);
    }
}
