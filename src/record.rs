//! Check records and the status vocabulary.
//!
//! A [`CheckRecord`] is the single unit of diagnostic output: every probe
//! produces one (or, for multi-key probes, several) and they are never
//! mutated afterwards. The ordered sequence of records is the sole input
//! to report rendering.

use chrono::{DateTime, Local};

use crate::ui::Theme;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The check passed.
    Pass,
    /// Something worth reviewing, but not a blocker.
    Warning,
    /// The check failed.
    Fail,
}

impl Status {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Warning => "⚠",
            Self::Fail => "✗",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Pass => "[ok]",
            Self::Warning => "[warn]",
            Self::Fail => "[FAIL]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Pass => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Fail => theme.error.apply_to(icon).to_string(),
        }
    }
}

/// One immutable diagnostic result.
#[derive(Debug, Clone)]
pub struct CheckRecord {
    /// Short label identifying which check produced this record.
    pub name: String,
    /// Outcome classification.
    pub status: Status,
    /// Human-readable description of what was observed.
    pub message: String,
    /// Remedy text, present only when a concrete fix is known.
    pub solution: Option<String>,
    /// Capture time.
    pub timestamp: DateTime<Local>,
}

impl CheckRecord {
    fn new(name: &str, status: Status, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            solution: None,
            timestamp: Local::now(),
        }
    }

    /// Create a passing record.
    pub fn pass(name: &str, message: impl Into<String>) -> Self {
        Self::new(name, Status::Pass, message)
    }

    /// Create a warning record.
    pub fn warning(name: &str, message: impl Into<String>) -> Self {
        Self::new(name, Status::Warning, message)
    }

    /// Create a failure record.
    pub fn fail(name: &str, message: impl Into<String>) -> Self {
        Self::new(name, Status::Fail, message)
    }

    /// Attach remedy text.
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = Some(solution.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_distinct() {
        assert_eq!(Status::Pass.icon(), "✓");
        assert_eq!(Status::Warning.icon(), "⚠");
        assert_eq!(Status::Fail.icon(), "✗");
    }

    #[test]
    fn bracketed_returns_text_labels() {
        assert_eq!(Status::Pass.bracketed(), "[ok]");
        assert_eq!(Status::Warning.bracketed(), "[warn]");
        assert_eq!(Status::Fail.bracketed(), "[FAIL]");
    }

    #[test]
    fn styled_contains_icon() {
        let theme = Theme::plain();
        for status in [Status::Pass, Status::Warning, Status::Fail] {
            assert!(status.styled(&theme).contains(status.icon()));
        }
    }

    #[test]
    fn pass_record_has_no_solution() {
        let record = CheckRecord::pass("network", "connectivity OK");
        assert_eq!(record.status, Status::Pass);
        assert_eq!(record.name, "network");
        assert!(record.solution.is_none());
    }

    #[test]
    fn with_solution_attaches_remedy() {
        let record = CheckRecord::fail("dns resolution", "could not resolve host")
            .with_solution("try an alternate DNS server");
        assert_eq!(record.status, Status::Fail);
        assert_eq!(
            record.solution.as_deref(),
            Some("try an alternate DNS server")
        );
    }

    #[test]
    fn timestamp_is_captured_at_creation() {
        let before = Local::now();
        let record = CheckRecord::warning("proxy environment", "http_proxy set");
        let after = Local::now();
        assert!(record.timestamp >= before);
        assert!(record.timestamp <= after);
    }
}
