//! Info-string codec errors

use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Recoverable failure of an info-string operation
///
/// On every error the target string is left in a defined state; see the
/// individual codec functions for which state.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoError {
    /// The input string already reaches its size class capacity
    Oversize { len: usize, limit: usize },

    /// Key or value contains `\`, `;` or `"`
    ForbiddenCharacter { ch: char },

    /// Key cannot be stored within the key capacity
    KeyTooLong { len: usize, limit: usize },

    /// Value cannot be stored within the value capacity
    ValueTooLong { len: usize, limit: usize },

    /// Appending the pair would reach the string capacity
    Overflow { needed: usize, limit: usize },

    /// Keys must contain at least one byte
    EmptyKey,
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oversize { len, limit } => {
                write!(f, "Oversize info string: {len} bytes, capacity {limit}")
            }
            Self::ForbiddenCharacter { ch: '\\' } => {
                f.write_str("Can't use keys or values with a \\")
            }
            Self::ForbiddenCharacter { ch: ';' } => {
                f.write_str("Can't use keys or values with a semicolon")
            }
            Self::ForbiddenCharacter { ch } => {
                write!(f, "Can't use keys or values with a {ch}")
            }
            Self::KeyTooLong { len, limit } => {
                write!(f, "Info key too long: {len} bytes, capacity {limit}")
            }
            Self::ValueTooLong { len, limit } => {
                write!(f, "Info value too long: {len} bytes, capacity {limit}")
            }
            Self::Overflow { needed, limit } => {
                write!(
                    f,
                    "Info string length exceeded: {needed} bytes needed, capacity {limit}"
                )
            }
            Self::EmptyKey => f.write_str("Can't use an empty info key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn forbidden_character_messages() {
        assert_eq!(
            InfoError::ForbiddenCharacter { ch: '\\' }.to_string(),
            "Can't use keys or values with a \\"
        );
        assert_eq!(
            InfoError::ForbiddenCharacter { ch: ';' }.to_string(),
            "Can't use keys or values with a semicolon"
        );
        assert_eq!(
            InfoError::ForbiddenCharacter { ch: '"' }.to_string(),
            "Can't use keys or values with a \""
        );
    }

    #[test]
    fn capacity_messages() {
        let err = InfoError::Overflow {
            needed: 1030,
            limit: 1024,
        };
        assert!(err.to_string().starts_with("Info string length exceeded"));
        assert!(InfoError::Oversize { len: 9000, limit: 8192 }
            .to_string()
            .contains("9000"));
    }
}
