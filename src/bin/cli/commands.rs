//! Command execution for the results binary.

use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};

use results_rs::{ReportConfig, ReportPrinter, ReportSummary, ResultParser};

use crate::cli::args::Cli;

/// Outcome of a report run that the binary maps onto an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Report printed; exit 0
    Reported,
    /// Report printed but `--fail-on-failure` tripped; exit 1
    FailuresFound,
}

/// Load the report configuration, falling back to defaults when no file is given.
pub fn load_configuration(cli: &Cli) -> anyhow::Result<ReportConfig> {
    match &cli.config {
        Some(path) => {
            debug!("Loading report configuration from {}", path.display());
            ReportConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))
        }
        None => Ok(ReportConfig::default()),
    }
}

/// Parse the results file and print the report to `out`.
pub fn report_command<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<RunStatus> {
    let config = load_configuration(cli)?;
    let parser = ResultParser::new(config);

    let summary: ReportSummary = parser
        .parse_file(&cli.results)
        .with_context(|| format!("Failed to read results file {}", cli.results.display()))?;
    info!(
        passed = summary.passed(),
        failed = summary.failed(),
        total = summary.total(),
        "Parsed results file"
    );

    ReportPrinter::print(&summary, out).context("Failed to write report")?;

    if cli.fail_on_failure && summary.has_failures() {
        return Ok(RunStatus::FailuresFound);
    }
    Ok(RunStatus::Reported)
}

/// Run the report against stdout.
pub fn run(cli: &Cli) -> anyhow::Result<RunStatus> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report_command(cli, &mut handle)
}
