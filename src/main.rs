// Entrypoint for the smoke-test CLI.
// - Keeps `main` small: set up logging, load configuration, run.
// - Any failure exits with status 1; a failed category create does not.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use category_smoke::{config::SmokeConfig, error::SmokeError, runner};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the report.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let reported = e
                .downcast_ref::<SmokeError>()
                .map_or(false, SmokeError::is_reported);
            if !reported {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    // Configured by `CATEGORY_API_URL` and friends, see `SmokeConfig::from_env`.
    let config = SmokeConfig::from_env().context("Invalid configuration")?;
    let mut stdout = io::stdout().lock();
    runner::run(&config, &mut stdout)?;
    Ok(())
}
