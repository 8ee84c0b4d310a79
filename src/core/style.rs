//! Display styles for report tokens.
//!
//! Colors are always emitted; the report is meant to be read in a terminal
//! or a CI log that understands ANSI escapes.

use owo_colors::OwoColorize;

use crate::core::config::MAX_NAME_WIDTH;
use crate::core::parser::Verdict;

/// Named display styles for report tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Green foreground
    Pass,
    /// Red foreground
    Fail,
    /// Terminal default foreground
    Default,
}

impl Style {
    /// Wrap `text` in this style's escape sequence, resetting to the
    /// default foreground afterwards.
    pub fn paint(self, text: &str) -> String {
        match self {
            Style::Pass => text.green().to_string(),
            Style::Fail => text.red().to_string(),
            Style::Default => text.default_color().to_string(),
        }
    }
}

impl From<Verdict> for Style {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Pass => Style::Pass,
            Verdict::Fail => Style::Fail,
        }
    }
}

/// Format one body entry: the name left-justified to `width`, then the
/// colorized verdict.
///
/// `width` is capped at [`MAX_NAME_WIDTH`]; format widths must fit in a `u16`.
pub fn format_entry(name: &str, verdict: Verdict, width: usize) -> String {
    let width = width.min(MAX_NAME_WIDTH);
    format!(
        "{name:<width$}: {}\n",
        Style::from(verdict).paint(verdict.label())
    )
}
