//! Diagnostic collection for parse sessions
//!
//! Diagnostics never alter parse state or abort parsing. Each one is kept in
//! the session's [`IssueCollector`] so callers can inspect it afterwards, and
//! is forwarded to `tracing` as it happens.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssueLevel {
    /// Suspicious input that was accepted as-is
    Warning,

    /// Malformed input; the affected record or value was skipped
    Error,
}

impl IssueLevel {
    /// Check if issue level indicates an error condition
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Prefix used in formatted diagnostics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic raised while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenIssue {
    /// Issue severity level
    pub level: IssueLevel,

    /// Human-readable message
    pub message: String,

    /// Session source name at the time of the diagnostic
    pub source: String,

    /// Session line at the time of the diagnostic
    pub line: usize,
}

impl TokenIssue {
    /// Create new diagnostic
    #[must_use]
    pub const fn new(level: IssueLevel, message: String, source: String, line: usize) -> Self {
        Self {
            level,
            message,
            source,
            line,
        }
    }

    /// Check if this is an error-level issue
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.level.is_error()
    }

    /// Render as `"<KIND>: <source>, line <n>: <message>"`
    #[must_use]
    pub fn format_issue(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TokenIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, line {}: {}",
            self.level, self.source, self.line, self.message
        )
    }
}

/// Issue collector for accumulating diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCollector {
    /// Diagnostics in the order they were raised
    issues: Vec<TokenIssue>,
}

impl IssueCollector {
    /// Create new empty issue collector
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Add issue to collection and forward it to `tracing`
    pub fn add_issue(&mut self, issue: TokenIssue) {
        match issue.level {
            IssueLevel::Error => tracing::error!(
                source = %issue.source,
                line = issue.line,
                "{}",
                issue.message
            ),
            IssueLevel::Warning => tracing::warn!(
                source = %issue.source,
                line = issue.line,
                "{}",
                issue.message
            ),
        }
        self.issues.push(issue);
    }

    /// Get all collected issues
    #[must_use]
    pub fn issues(&self) -> &[TokenIssue] {
        &self.issues
    }

    /// Check if any issues were collected
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Check if any error-level issues were collected
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(TokenIssue::is_error)
    }

    /// Get count of issues
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Take every collected issue, leaving the collector empty
    pub fn drain(&mut self) -> Vec<TokenIssue> {
        core::mem::take(&mut self.issues)
    }

    /// Clear all issues
    pub fn clear(&mut self) {
        self.issues.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(level: IssueLevel) -> TokenIssue {
        TokenIssue::new(level, "Missing {".to_string(), "maps.info".to_string(), 4)
    }

    #[test]
    fn format_matches_diagnostic_layout() {
        assert_eq!(
            issue(IssueLevel::Error).format_issue(),
            "ERROR: maps.info, line 4: Missing {"
        );
        assert_eq!(
            issue(IssueLevel::Warning).to_string(),
            "WARNING: maps.info, line 4: Missing {"
        );
    }

    #[test]
    fn collector_tracks_errors() {
        let mut collector = IssueCollector::new();
        assert!(!collector.has_issues());

        collector.add_issue(issue(IssueLevel::Warning));
        assert!(collector.has_issues());
        assert!(!collector.has_errors());

        collector.add_issue(issue(IssueLevel::Error));
        assert!(collector.has_errors());
        assert_eq!(collector.issue_count(), 2);

        let drained = collector.drain();
        assert_eq!(drained.len(), 2);
        assert!(!collector.has_issues());
    }

    #[test]
    fn level_ordering() {
        assert!(IssueLevel::Error > IssueLevel::Warning);
        assert!(IssueLevel::Error.is_error());
        assert!(!IssueLevel::Warning.is_error());
    }
}
