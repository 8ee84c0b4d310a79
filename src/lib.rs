//! # results-rs: Test Result Reporter
//!
//! Reads a flat results file where each line holds a test name and a status
//! code, classifies every line as PASS or FAIL from the first character of
//! its status, and renders a colorized report with aggregate counts.
//!
//! ```text
//! results file          report
//! ─────────────         ─────────────────────────────────
//! beta 0extra    ──►    Test Results:
//! alpha 1ok
//!                       alpha                    : PASS
//!                       beta                     : FAIL
//!
//!                       1 test failed.
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use results_rs::{ReportPrinter, ResultParser};
//!
//! let summary = ResultParser::default().parse_str("add 1\nsub 0\n");
//! assert_eq!(summary.passed(), 1);
//! assert_eq!(summary.failed(), 1);
//! assert_eq!(ReportPrinter::summary_line(&summary), "1 test failed.");
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Parsing, classification, and shared infrastructure
pub mod core {
    //! Result parsing, display styles, configuration, and error handling.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod parser;
    pub mod style;
}

// Report output
pub mod io {
    //! Terminal rendering of parsed results.

    pub mod reports;
}

// Re-export primary types for convenience
pub use crate::core::config::ReportConfig;
pub use crate::core::errors::{ReporterError, Result};
pub use crate::core::parser::{ReportSummary, ResultLine, ResultParser, ResultSet, Verdict};
pub use crate::core::style::Style;
pub use crate::io::reports::ReportPrinter;
