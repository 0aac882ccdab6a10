//! Primary parse error type

use alloc::string::String;
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Unrecoverable failure of a tokenizer-driven parse
///
/// Use session diagnostics for problems that allow parsing to continue.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The next token was not the required literal
    TokenMismatch {
        expected: String,
        found: String,
        line: usize,
    },

    /// A restore was requested with an empty checkpoint slot
    NoCheckpoint { line: usize },
}

impl ParseError {
    /// Session line at which the error was raised
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TokenMismatch { line, .. } | Self::NoCheckpoint { line } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenMismatch {
                expected,
                found,
                line,
            } => {
                write!(f, "Expected '{expected}' but found '{found}' at line {line}")
            }
            Self::NoCheckpoint { line } => {
                write!(
                    f,
                    "No parse checkpoint to restore at line {line}: read a token or back up first"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn mismatch_display() {
        let err = ParseError::TokenMismatch {
            expected: ")".to_string(),
            found: "4".to_string(),
            line: 12,
        };
        assert_eq!(err.to_string(), "Expected ')' but found '4' at line 12");
        assert_eq!(err.line(), 12);
    }

    #[test]
    fn mismatch_with_empty_token() {
        let err = ParseError::TokenMismatch {
            expected: "(".to_string(),
            found: String::new(),
            line: 0,
        };
        assert!(err.to_string().contains("found ''"));
    }

    #[test]
    fn no_checkpoint_display() {
        let err = ParseError::NoCheckpoint { line: 3 };
        assert!(err.to_string().contains("line 3"));
        assert_eq!(err.line(), 3);
    }
}
