//! CLI argument definitions for the results binary.

use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Test harness: Reports the results of a set of tests.
#[derive(Parser, Debug)]
#[command(name = "results")]
#[command(version = VERSION)]
#[command(about = "Test harness: Reports the results of a set of tests.")]
#[command(long_about = "
Reads a results file with one `<name> <status>` record per line and prints a
colorized PASS/FAIL listing. A status starting with '1' is a pass; anything
else is a failure. Lines without a space are ignored.

Common Usage:

  # Report a results file
  results -r build/results.txt

  # Fail the CI step when any test failed
  results -r build/results.txt --fail-on-failure

  # Use a custom name column width or pass marker
  results -r build/results.txt --config report.yml
")]
pub struct Cli {
    /// Test result file to report
    #[arg(short, long, value_name = "PATH")]
    pub results: PathBuf,

    /// YAML report configuration file
    #[arg(short, long, value_name = "PATH", env = "RESULTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any test failed
    #[arg(long)]
    pub fail_on_failure: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
