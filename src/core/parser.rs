//! Results file parsing and pass/fail classification.
//!
//! A results file holds one record per line: a test name, a single space,
//! and a status string. Only the first character of the status matters.
//!
//! ```text
//! add      1
//! branch   0
//! ```
//!
//! Lines are sorted by their full raw text before classification, so the
//! report order follows the raw line and not the test name alone.

use std::path::Path;

use tracing::{debug, trace};

use crate::core::config::ReportConfig;
use crate::core::errors::Result;
use crate::core::file_utils::FileReader;
use crate::core::style::format_entry;

/// Outcome of a single result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Status field starts with the pass marker
    Pass,
    /// Anything else, including an empty status field
    Fail,
}

impl Verdict {
    /// Token printed in the report body.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

/// One well-formed line of a results file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLine<'a> {
    /// The line exactly as read (without its line terminator)
    pub raw: &'a str,
    /// Text before the first space
    pub name: &'a str,
    /// Text between the first and second space
    pub status: &'a str,
}

impl<'a> ResultLine<'a> {
    /// Split a raw line on single spaces.
    ///
    /// Returns `None` when the line has fewer than two fields, i.e. it
    /// contains no space at all.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut fields = raw.split(' ');
        let name = fields.next()?;
        let status = fields.next()?;
        Some(Self { raw, name, status })
    }

    /// Classify against `pass_marker`. An empty status has no first
    /// character and is a failure.
    pub fn verdict(&self, pass_marker: char) -> Verdict {
        match self.status.chars().next() {
            Some(c) if c == pass_marker => Verdict::Pass,
            _ => Verdict::Fail,
        }
    }
}

/// Well-formed result lines in raw lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet<'a> {
    lines: Vec<ResultLine<'a>>,
}

impl<'a> ResultSet<'a> {
    /// Collect and sort every well-formed line of `text`, dropping the rest.
    pub fn from_text(text: &'a str) -> Self {
        let mut raw_lines: Vec<&str> = text.lines().collect();
        raw_lines.sort_unstable();

        let lines = raw_lines
            .into_iter()
            .filter_map(|raw| {
                let line = ResultLine::parse(raw);
                if line.is_none() {
                    trace!("Skipping malformed result line: {raw:?}");
                }
                line
            })
            .collect();

        Self { lines }
    }

    /// Iterate lines in report order.
    pub fn iter(&self) -> impl Iterator<Item = &ResultLine<'a>> {
        self.lines.iter()
    }
}

/// Formatted report body plus aggregate counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    body: String,
    passed: usize,
    failed: usize,
}

impl ReportSummary {
    /// The multi-line PASS/FAIL listing, one newline-terminated entry per test.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Number of passing tests.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failing tests.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Number of classified tests.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// True if at least one test failed.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Reads results files and classifies their lines.
#[derive(Debug, Clone, Default)]
pub struct ResultParser {
    config: ReportConfig,
}

impl ResultParser {
    /// Create a parser with the given report settings.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Read `path` in full and build its report.
    pub fn parse_file(&self, path: &Path) -> Result<ReportSummary> {
        let content = FileReader::read_to_string(path)?;
        let summary = self.parse_str(&content);
        debug!(
            "Parsed {}: {} passed, {} failed",
            path.display(),
            summary.passed,
            summary.failed
        );
        Ok(summary)
    }

    /// Build a report from in-memory results text.
    pub fn parse_str(&self, text: &str) -> ReportSummary {
        let set = ResultSet::from_text(text);
        let mut summary = ReportSummary::default();

        for line in set.iter() {
            let verdict = line.verdict(self.config.pass_marker);
            match verdict {
                Verdict::Pass => summary.passed += 1,
                Verdict::Fail => summary.failed += 1,
            }
            summary
                .body
                .push_str(&format_entry(line.name, verdict, self.config.name_width));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GREEN_PASS: &str = "\x1b[32mPASS\x1b[39m";
    const RED_FAIL: &str = "\x1b[31mFAIL\x1b[39m";

    fn parse(text: &str) -> ReportSummary {
        ResultParser::default().parse_str(text)
    }

    #[test]
    fn test_verdict_from_first_status_char() {
        let marker = '1';
        assert_eq!(ResultLine::parse("foo 1").unwrap().verdict(marker), Verdict::Pass);
        assert_eq!(ResultLine::parse("foo 10").unwrap().verdict(marker), Verdict::Pass);
        assert_eq!(ResultLine::parse("foo 0").unwrap().verdict(marker), Verdict::Fail);
        assert_eq!(ResultLine::parse("foo x").unwrap().verdict(marker), Verdict::Fail);
    }

    #[test]
    fn test_empty_status_is_fail() {
        let line = ResultLine::parse("foo ").unwrap();
        assert_eq!(line.status, "");
        assert_eq!(line.verdict('1'), Verdict::Fail);
    }

    #[test]
    fn test_line_without_space_is_skipped() {
        assert!(ResultLine::parse("foo").is_none());
        assert!(ResultLine::parse("").is_none());

        let summary = parse("foo\n");
        assert_eq!(summary.total(), 0);
        assert!(!summary.body().contains("foo"));
    }

    #[test]
    fn test_split_on_single_space() {
        let line = ResultLine::parse("foo  1").unwrap();
        assert_eq!(line.name, "foo");
        assert_eq!(line.status, "");
        assert_eq!(line.verdict('1'), Verdict::Fail);

        let line = ResultLine::parse("foo 1 extra fields").unwrap();
        assert_eq!(line.status, "1");
        assert_eq!(line.verdict('1'), Verdict::Pass);
    }

    #[test]
    fn test_sorted_by_raw_line() {
        let summary = parse("beta 0extra\nalpha 1ok\n");

        let expected = format!(
            "{:<25}: {GREEN_PASS}\n{:<25}: {RED_FAIL}\n",
            "alpha", "beta"
        );
        assert_eq!(summary.body(), expected);
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 1);
    }

    #[test]
    fn test_raw_order_not_name_order() {
        // "a 1" < "a0 1" by raw text because ' ' sorts before '0'.
        let set = ResultSet::from_text("a0 1\nab 0\na 1\n");
        let names: Vec<&str> = set.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["a", "a0", "ab"]);

        // Same name, ordered by the status text that follows it.
        let set = ResultSet::from_text("t 1\nt 0\n");
        let statuses: Vec<&str> = set.iter().map(|l| l.status).collect();
        assert_eq!(statuses, vec!["0", "1"]);
    }

    #[test]
    fn test_empty_input() {
        let summary = parse("");
        assert_eq!(summary.body(), "");
        assert_eq!((summary.passed(), summary.failed()), (0, 0));
        assert_eq!(ResultSet::from_text("").iter().count(), 0);
    }

    #[test]
    fn test_crlf_lines() {
        let summary = parse("t1 1\r\nt2 0\r\n");
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.body().contains('\r'));
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let name = "a_test_name_longer_than_the_column";
        let summary = parse(&format!("{name} 1\n"));
        assert_eq!(summary.body(), format!("{name}: {GREEN_PASS}\n"));
    }

    #[test]
    fn test_custom_config() {
        let parser = ResultParser::new(ReportConfig {
            name_width: 6,
            pass_marker: 'P',
        });
        let summary = parser.parse_str("mul PASSED\ndiv 1\n");

        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(
            summary.body(),
            format!("div   : {RED_FAIL}\nmul   : {GREEN_PASS}\n")
        );
    }

    #[test]
    fn test_unvalidated_huge_width_does_not_panic() {
        let parser = ResultParser::new(ReportConfig {
            name_width: 100_000_000_000,
            ..ReportConfig::default()
        });
        let summary = parser.parse_str("t 1\n");

        assert_eq!(summary.passed(), 1);
        assert!(summary.body().ends_with(&format!(": {GREEN_PASS}\n")));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = ResultParser::default().parse_file(Path::new("/nonexistent/results.txt"));
        assert!(result.is_err());
    }
}
