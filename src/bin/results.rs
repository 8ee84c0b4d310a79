//! Results CLI - colorized reporter for flat test result files.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, RunStatus};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean. `--verbose`
    // wins over RUST_LOG.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&cli)? {
        RunStatus::Reported => Ok(ExitCode::SUCCESS),
        RunStatus::FailuresFound => Ok(ExitCode::FAILURE),
    }
}
