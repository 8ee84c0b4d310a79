//! Property tests for results parsing and classification.

use proptest::prelude::*;

use results_rs::{ReportPrinter, ResultParser, ResultSet};

/// Lines drawn from a small alphabet that includes spaces so that
/// well-formed, malformed and empty-status lines all show up.
fn result_line() -> impl Strategy<Value = String> {
    "[a-c01x ]{0,8}"
}

fn results_text() -> impl Strategy<Value = String> {
    prop::collection::vec(result_line(), 0..20).prop_map(|lines| {
        let mut text = lines.join("\n");
        text.push('\n');
        text
    })
}

proptest! {
    /// Property: every line containing a space is counted exactly once
    #[test]
    fn prop_counts_cover_well_formed_lines(text in results_text()) {
        let summary = ResultParser::default().parse_str(&text);
        let well_formed = text.lines().filter(|l| l.contains(' ')).count();

        prop_assert_eq!(summary.passed() + summary.failed(), well_formed);
        prop_assert_eq!(summary.body().lines().count(), well_formed);
    }

    /// Property: report order follows the raw line text
    #[test]
    fn prop_lines_sorted_by_raw_text(text in results_text()) {
        let set = ResultSet::from_text(&text);
        let raws: Vec<&str> = set.iter().map(|l| l.raw).collect();

        prop_assert!(raws.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Property: a line passes iff its status starts with '1'
    #[test]
    fn prop_verdict_matches_status_prefix(name in "[a-z]{1,6}", status in "[01x]{0,4}") {
        let raw = format!("{name} {status}");
        let summary = ResultParser::default().parse_str(&raw);
        let expected = if status.starts_with('1') { (1, 0) } else { (0, 1) };

        prop_assert_eq!((summary.passed(), summary.failed()), expected);
        let line = ResultSet::from_text(&raw).iter().next().copied();
        prop_assert!(line.is_some());
    }

    /// Property: parsing is deterministic
    #[test]
    fn prop_parse_is_idempotent(text in results_text()) {
        let parser = ResultParser::default();
        let first = ReportPrinter::render(&parser.parse_str(&text));
        let second = ReportPrinter::render(&parser.parse_str(&text));

        prop_assert_eq!(first, second);
    }
}
