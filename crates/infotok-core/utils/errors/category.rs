//! Error categorization for filtering and grouping

use super::CoreError;
use crate::info::InfoError;
use core::fmt;

/// Error category for filtering and user interface organization
///
/// # Examples
///
/// ```rust
/// use infotok_core::parser::ParseError;
/// use infotok_core::utils::errors::{CoreError, ErrorCategory};
///
/// let error = CoreError::from(ParseError::NoCheckpoint { line: 1 });
/// assert_eq!(error.category(), ErrorCategory::Parsing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Token stream did not match what a structured parser expected
    Parsing,

    /// Key or value rejected because of its content
    Validation,

    /// A size class limit was hit
    Capacity,

    /// Problems with tokenizer or codec configuration
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ErrorCategory {
    /// Get lowercase category name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parsing => "parsing",
            Self::Validation => "validation",
            Self::Capacity => "capacity",
            Self::Configuration => "configuration",
        }
    }
}

impl CoreError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) => ErrorCategory::Parsing,
            Self::Info(InfoError::ForbiddenCharacter { .. } | InfoError::EmptyKey) => {
                ErrorCategory::Validation
            }
            Self::Info(_) => ErrorCategory::Capacity,
            Self::Config(_) => ErrorCategory::Configuration,
        }
    }
}
