//! Owned token type produced by the tokenizer
//!
//! Tokens are copied out of the input buffer into a bounded byte string.
//! Bytes past the configured capacity are dropped and the token remembers
//! that it was cut, instead of failing the read.

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::fmt;

/// A single lexical unit: a bare word, the body of a quoted string, or
/// nothing at all when the input (or the current line) is exhausted
///
/// # Example
///
/// ```rust
/// use infotok_core::tokenizer::Tokenizer;
///
/// let mut tokenizer = Tokenizer::from_str("map \"q3dm17\"");
/// assert_eq!(tokenizer.parse(), "map");
/// assert_eq!(tokenizer.parse(), "q3dm17");
/// assert!(tokenizer.parse().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// Token bytes as read from the buffer
    bytes: Vec<u8>,

    /// Bytes were dropped because the token hit its capacity
    truncated: bool,

    /// Session line at which the token started
    line: usize,
}

impl Token {
    /// Create a token from raw bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>, line: usize) -> Self {
        Self {
            bytes,
            truncated: false,
            line,
        }
    }

    /// Empty token at `line`
    #[must_use]
    pub const fn empty(line: usize) -> Self {
        Self {
            bytes: Vec::new(),
            truncated: false,
            line,
        }
    }

    /// Raw token bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Token text if it is valid UTF-8
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Token text with invalid UTF-8 replaced
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Consume the token, returning its bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check for the empty token (end of input or end of line)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check whether bytes were dropped past the token capacity
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Line number at which the token started
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Check whether the token is exactly the single byte `byte`
    #[must_use]
    pub fn is_single(&self, byte: u8) -> bool {
        self.bytes.as_slice() == [byte]
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Token {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Bounded accumulator the scanner writes into
///
/// Mirrors a fixed buffer of `capacity` bytes with one byte reserved for the
/// terminator, so at most `capacity - 1` bytes are kept.
#[derive(Debug)]
pub(crate) struct TokenBuffer {
    /// Accumulated bytes
    bytes: Vec<u8>,
    /// Maximum number of kept bytes
    limit: usize,
    /// Bytes were dropped
    truncated: bool,
}

impl TokenBuffer {
    /// Create a buffer for a token capacity (terminator included)
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit: capacity.saturating_sub(1),
            truncated: false,
        }
    }

    /// Append a byte, dropping it silently when full
    pub(crate) fn push(&mut self, byte: u8) {
        if self.bytes.len() < self.limit {
            self.bytes.push(byte);
        } else {
            self.truncated = true;
        }
    }

    /// Produce the finished token
    pub(crate) fn finish(self, line: usize) -> Token {
        if self.truncated {
            tracing::trace!(line, limit = self.limit, "token truncated");
        }
        Token {
            bytes: self.bytes,
            truncated: self.truncated,
            line,
        }
    }
}
