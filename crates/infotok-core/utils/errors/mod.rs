//! Crate-wide error handling for infotok
//!
//! Provides the `CoreError` enum that wraps the module-specific errors of the
//! tokenizer, the structured parsers and the info-string codec, plus an
//! `ErrorCategory` for filtering and grouping.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Data-dependent failures (oversize strings, token mismatches) are values
//! - Programmer errors (invalid arguments) panic with a documented message
//! - Refused writes and malformed records are logged and the caller continues
//!
//! # Examples
//!
//! ```rust
//! use infotok_core::utils::errors::{CoreError, ErrorCategory};
//! use infotok_core::info::InfoError;
//!
//! let err: CoreError = InfoError::Oversize { len: 2048, limit: 1024 }.into();
//! assert_eq!(err.category(), ErrorCategory::Capacity);
//! assert!(err.is_recoverable());
//! ```

mod category;
mod core;

pub use category::ErrorCategory;
pub use self::core::{CoreError, Result};

use crate::{info::InfoError, parser::ParseError};

/// Convert from tokenizer/parser errors
impl From<ParseError> for CoreError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Convert from info-string codec errors
impl From<InfoError> for CoreError {
    fn from(err: InfoError) -> Self {
        Self::Info(err)
    }
}
