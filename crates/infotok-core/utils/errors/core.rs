//! Core error type for infotok operations

use alloc::{format, string::String};
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

use crate::{info::InfoError, parser::ParseError};

/// Main error type for infotok operations
///
/// Wraps the module errors so callers driving several layers (tokenizer,
/// structured parsers, codec) can propagate with a single `?`.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Tokenizer or structured-parser failure
    Parse(ParseError),

    /// Info-string codec failure
    Info(InfoError),

    /// Invalid configuration value
    Config(String),
}

impl CoreError {
    /// Create configuration error from message
    pub fn config<T: fmt::Display>(message: T) -> Self {
        Self::Config(format!("{message}"))
    }

    /// Check if error is recoverable
    ///
    /// Data errors leave the caller's buffers in a defined state and parsing
    /// can continue. A configuration error means no session was created.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Info(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Parse error: {err}"),
            Self::Info(err) => write!(f, "Info string error: {err}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}
