//! Terminal report rendering.

use std::io::{self, Write};

use crate::core::parser::ReportSummary;

/// Header printed above the report body.
pub const REPORT_HEADER: &str = "Test Results:";

fn pluralize(count: usize) -> &'static str {
    if count == 1 {
        "test"
    } else {
        "tests"
    }
}

/// Prints a [`ReportSummary`] as the human-readable test report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPrinter;

impl ReportPrinter {
    /// The trailing line: failures take precedence over passes.
    pub fn summary_line(summary: &ReportSummary) -> String {
        if summary.has_failures() {
            format!("{} {} failed.", summary.failed(), pluralize(summary.failed()))
        } else {
            format!("{} {} passed.", summary.passed(), pluralize(summary.passed()))
        }
    }

    /// Render the complete report as it appears on stdout.
    pub fn render(summary: &ReportSummary) -> String {
        format!(
            "{REPORT_HEADER}\n\n{}\n{}\n",
            summary.body(),
            Self::summary_line(summary)
        )
    }

    /// Write the complete report to `out`.
    pub fn print<W: Write>(summary: &ReportSummary, out: &mut W) -> io::Result<()> {
        out.write_all(Self::render(summary).as_bytes())?;
        out.flush()
    }
}
