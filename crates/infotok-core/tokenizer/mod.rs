//! Session-aware text tokenizer
//!
//! Splits a NUL-terminated byte buffer into bare words and quoted strings,
//! skipping whitespace and C/C++ style comments while keeping a line counter
//! for diagnostics.
//!
//! # Example
//!
//! ```rust
//! use infotok_core::tokenizer::Tokenizer;
//!
//! let source = "// header\nseta name \"Player One\"\nseta rate 25000";
//! let mut tokenizer = Tokenizer::new(source.as_bytes(), "autoexec.cfg");
//!
//! let mut words = Vec::new();
//! loop {
//!     let token = tokenizer.parse();
//!     if token.is_empty() {
//!         break;
//!     }
//!     words.push(token.to_string());
//! }
//! assert_eq!(words, ["seta", "name", "Player One", "seta", "rate", "25000"]);
//! assert_eq!(tokenizer.line(), 2);
//! ```

mod compress;
pub mod cursor;
pub mod options;
mod scanner;
pub mod session;
pub mod state;
pub mod tokens;

pub use compress::compress;
pub use cursor::{Cursor, CursorPosition};
pub use options::{ParseOptions, MAX_TOKEN_CHARS};
pub use session::ParseSession;
pub use state::{IssueCollector, IssueLevel, TokenIssue};
pub use tokens::Token;

use crate::parser::ParseError;

/// A cursor over one buffer paired with the session that reads it
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    /// Read position in the caller's buffer
    cursor: Cursor<'a>,
    /// Line counter, checkpoint and diagnostics
    session: ParseSession,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer with a fresh session named `name`
    #[must_use]
    pub fn new(data: &'a [u8], name: &str) -> Self {
        Self {
            cursor: Cursor::new(data),
            session: ParseSession::begin(name),
        }
    }

    /// Create a tokenizer over text with an unnamed session
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &'a str) -> Self {
        Self::new(text.as_bytes(), "")
    }

    /// Continue an existing session on a new buffer
    #[must_use]
    pub const fn with_session(data: Cursor<'a>, session: ParseSession) -> Self {
        Self {
            cursor: data,
            session,
        }
    }

    /// Read the next token
    ///
    /// Never fails: an empty token means the input is exhausted or, when
    /// `allow_line_breaks` is `false`, that a newline was crossed before the
    /// next token. In the latter case the cursor is left on that next token
    /// so it can still be read.
    ///
    /// Every call first stores a checkpoint, so [`Tokenizer::unget`] can
    /// rewind exactly one token.
    pub fn next_token(&mut self, allow_line_breaks: bool) -> Token {
        self.session.next_token(&mut self.cursor, allow_line_breaks)
    }

    /// Read the next token, crossing line breaks
    pub fn parse(&mut self) -> Token {
        self.next_token(true)
    }

    /// Read a token and require it to equal `expected` (case-sensitive)
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TokenMismatch`] with the token actually read.
    pub fn match_token(&mut self, expected: &str) -> Result<(), ParseError> {
        let token = self.parse();
        if token == expected {
            Ok(())
        } else {
            Err(ParseError::TokenMismatch {
                expected: expected.into(),
                found: token.to_string_lossy().into_owned(),
                line: self.session.line(),
            })
        }
    }

    /// Rewind to the position before the most recent token read
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoCheckpoint`] if nothing was read since the
    /// last rewind.
    pub fn unget(&mut self) -> Result<(), ParseError> {
        self.session.restore(&mut self.cursor)
    }

    /// Store the current position as the checkpoint
    pub fn backup(&mut self) {
        self.session.backup(&self.cursor);
    }

    /// Skip to just past the next newline
    pub fn skip_rest_of_line(&mut self) {
        scanner::skip_rest_of_line(&mut self.session, &mut self.cursor);
    }

    /// Current line counter
    #[must_use]
    pub const fn line(&self) -> usize {
        self.session.line()
    }

    /// Overwrite the line counter
    pub fn set_line(&mut self, line: usize) {
        self.session.set_line(line);
    }

    /// Check whether a read already ran off the end of the input
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Unread bytes
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.cursor.remaining()
    }

    /// Read cursor
    #[must_use]
    pub const fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Session state
    #[must_use]
    pub const fn session(&self) -> &ParseSession {
        &self.session
    }

    /// Mutable session state, for diagnostics raised by callers
    pub fn session_mut(&mut self) -> &mut ParseSession {
        &mut self.session
    }

    /// Diagnostics raised so far
    #[must_use]
    pub fn issues(&self) -> &[TokenIssue] {
        self.session.issues()
    }

    /// Split into cursor and session
    #[must_use]
    pub fn into_parts(self) -> (Cursor<'a>, ParseSession) {
        (self.cursor, self.session)
    }
}

#[cfg(test)]
mod tests;
