//! Parse session: line counter, diagnostic source name and checkpoint
//!
//! A session is an explicit value owned by whoever drives the parse, so two
//! parses never share a line counter or checkpoint. The checkpoint is a
//! single slot: every token read overwrites it, and restoring consumes it.

use alloc::string::{String, ToString};

use super::{
    cursor::{Cursor, CursorPosition},
    options::ParseOptions,
    scanner,
    state::{IssueCollector, IssueLevel, TokenIssue},
    tokens::Token,
};
use crate::{parser::ParseError, utils::CoreError};

/// Single-slot saved position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Checkpoint {
    /// Line counter at backup time
    line: usize,
    /// Cursor state at backup time
    cursor: CursorPosition,
}

/// State shared by every token read of one parse
///
/// # Example
///
/// ```rust
/// use infotok_core::tokenizer::{Cursor, ParseSession};
///
/// let mut session = ParseSession::begin("inline");
/// let mut cursor = Cursor::from_str("first\nsecond");
///
/// assert_eq!(session.next_token(&mut cursor, true), "first");
/// assert_eq!(session.next_token(&mut cursor, true), "second");
///
/// // Un-get the last token
/// session.restore(&mut cursor)?;
/// assert_eq!(session.next_token(&mut cursor, true), "second");
/// # Ok::<(), infotok_core::parser::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSession {
    /// Label used in diagnostics
    source_name: String,
    /// Current line counter
    line: usize,
    /// One-level backup slot
    checkpoint: Option<Checkpoint>,
    /// Tokenizer configuration
    options: ParseOptions,
    /// Diagnostics raised during this session
    issues: IssueCollector,
}

impl Default for ParseSession {
    fn default() -> Self {
        Self::begin("")
    }
}

impl ParseSession {
    /// Start a session with default options
    ///
    /// The line counter starts at 0 and `name` is truncated to the source
    /// name capacity.
    #[must_use]
    pub fn begin(name: &str) -> Self {
        let options = ParseOptions::default();
        Self {
            source_name: bounded_name(name, options.max_source_name),
            line: 0,
            checkpoint: None,
            options,
            issues: IssueCollector::new(),
        }
    }

    /// Start a session with custom options
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if `options` fails validation.
    pub fn with_options(name: &str, options: ParseOptions) -> Result<Self, CoreError> {
        options.validate()?;
        Ok(Self {
            source_name: bounded_name(name, options.max_source_name),
            line: 0,
            checkpoint: None,
            options,
            issues: IssueCollector::new(),
        })
    }

    /// Reset the line counter and rename the session
    ///
    /// Collected diagnostics and the checkpoint are discarded as well.
    pub fn restart(&mut self, name: &str) {
        self.source_name = bounded_name(name, self.options.max_source_name);
        self.line = 0;
        self.checkpoint = None;
        self.issues.clear();
    }

    /// Label used in diagnostics
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Current line counter
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Overwrite the line counter
    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    /// Session configuration
    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Save the current line and `cursor` into the checkpoint slot
    pub fn backup(&mut self, cursor: &Cursor<'_>) {
        self.checkpoint = Some(Checkpoint {
            line: self.line,
            cursor: cursor.position(),
        });
    }

    /// Check whether a checkpoint is waiting to be restored
    #[must_use]
    pub const fn has_checkpoint(&self) -> bool {
        self.checkpoint.is_some()
    }

    /// Move `cursor` and the line counter back to the checkpoint
    ///
    /// The checkpoint is consumed; a second restore without an intervening
    /// backup (or token read) fails.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoCheckpoint`] if the slot is empty.
    pub fn restore(&mut self, cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
        let checkpoint = self
            .checkpoint
            .take()
            .ok_or(ParseError::NoCheckpoint { line: self.line })?;
        self.line = checkpoint.line;
        cursor.seek(checkpoint.cursor);
        Ok(())
    }

    /// Read one token from `cursor`
    ///
    /// See [`super::Tokenizer::next_token`] for the token rules.
    pub fn next_token(&mut self, cursor: &mut Cursor<'_>, allow_line_breaks: bool) -> Token {
        scanner::next_token(self, cursor, allow_line_breaks)
    }

    /// Record an error diagnostic at the current line
    pub fn error(&mut self, message: impl Into<String>) {
        self.report(IssueLevel::Error, message.into());
    }

    /// Record a warning diagnostic at the current line
    pub fn warning(&mut self, message: impl Into<String>) {
        self.report(IssueLevel::Warning, message.into());
    }

    /// Diagnostics raised so far
    #[must_use]
    pub fn issues(&self) -> &[TokenIssue] {
        self.issues.issues()
    }

    /// Mutable access to the diagnostic collector
    pub fn issues_mut(&mut self) -> &mut IssueCollector {
        &mut self.issues
    }

    fn report(&mut self, level: IssueLevel, message: String) {
        let issue = TokenIssue::new(level, message, self.source_name.clone(), self.line);
        self.issues.add_issue(issue);
    }

    /// Advance the line counter by one
    pub(crate) fn bump_line(&mut self) {
        self.line = self.line.saturating_add(1);
    }
}

/// Copy `name`, keeping at most `capacity - 1` bytes on a char boundary
fn bounded_name(name: &str, capacity: usize) -> String {
    let limit = capacity.saturating_sub(1);
    if name.len() <= limit {
        return name.to_string();
    }

    let mut end = limit;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}
