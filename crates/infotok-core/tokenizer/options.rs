//! Tokenizer configuration

use crate::utils::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default token capacity in bytes, terminator included
pub const MAX_TOKEN_CHARS: usize = 1024;

/// Default capacity for session source names, terminator included
pub const MAX_SOURCE_NAME: usize = 1024;

/// Configuration for a parse session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseOptions {
    /// Token capacity; tokens keep at most `max_token_chars - 1` bytes
    pub max_token_chars: usize,

    /// Source name capacity; names keep at most `max_source_name - 1` bytes
    pub max_source_name: usize,

    /// Count newlines inside `/* */` comments
    pub count_block_comment_lines: bool,

    /// Count newlines inside quoted strings
    pub count_quoted_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_token_chars: MAX_TOKEN_CHARS,
            max_source_name: MAX_SOURCE_NAME,
            count_block_comment_lines: true,
            count_quoted_lines: true,
        }
    }
}

impl ParseOptions {
    /// Set token capacity
    #[must_use]
    pub const fn with_max_token_chars(mut self, max: usize) -> Self {
        self.max_token_chars = max;
        self
    }

    /// Set source name capacity
    #[must_use]
    pub const fn with_max_source_name(mut self, max: usize) -> Self {
        self.max_source_name = max;
        self
    }

    /// Enable or disable line counting inside block comments
    #[must_use]
    pub const fn with_block_comment_lines(mut self, enabled: bool) -> Self {
        self.count_block_comment_lines = enabled;
        self
    }

    /// Enable or disable line counting inside quoted strings
    #[must_use]
    pub const fn with_quoted_lines(mut self, enabled: bool) -> Self {
        self.count_quoted_lines = enabled;
        self
    }

    /// Check that every capacity leaves room for at least one byte
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] when a capacity is below 2.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_token_chars < 2 {
            return Err(CoreError::config(format_args!(
                "max_token_chars must be at least 2, got {}",
                self.max_token_chars
            )));
        }
        if self.max_source_name < 2 {
            return Err(CoreError::config(format_args!(
                "max_source_name must be at least 2, got {}",
                self.max_source_name
            )));
        }
        Ok(())
    }
}
