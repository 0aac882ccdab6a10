//! Capacity limits for info strings
//!
//! Info strings come in two size classes that differ only in their capacity
//! constants. Every capacity counts a reserved terminator byte, so a string of
//! class [`SizeClass::Standard`] holds at most 1023 bytes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of a standard info string
pub const MAX_INFO_STRING: usize = 1024;
/// Capacity of a standard info key
pub const MAX_INFO_KEY: usize = 1024;
/// Capacity of a standard info value
pub const MAX_INFO_VALUE: usize = 1024;

/// Capacity of a big info string
pub const BIG_INFO_STRING: usize = 8192;
/// Capacity of a big info key
pub const BIG_INFO_KEY: usize = 8192;
/// Capacity of a big info value
pub const BIG_INFO_VALUE: usize = 8192;

/// Byte capacities enforced by the codec
///
/// Each limit is exclusive: a key is accepted only while
/// `key.len() < max_key`, and likewise for values and whole strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfoLimits {
    /// Exclusive upper bound on key length
    pub max_key: usize,
    /// Exclusive upper bound on value length
    pub max_value: usize,
    /// Exclusive upper bound on total string length
    pub max_string: usize,
}

impl InfoLimits {
    /// Limits of [`SizeClass::Standard`]
    pub const STANDARD: Self = Self {
        max_key: MAX_INFO_KEY,
        max_value: MAX_INFO_VALUE,
        max_string: MAX_INFO_STRING,
    };

    /// Limits of [`SizeClass::Big`]
    pub const BIG: Self = Self {
        max_key: BIG_INFO_KEY,
        max_value: BIG_INFO_VALUE,
        max_string: BIG_INFO_STRING,
    };

    /// Create custom limits
    ///
    /// # Panics
    ///
    /// Panics if any capacity is zero, since no string, not even an empty
    /// one, would fit.
    #[must_use]
    pub const fn new(max_key: usize, max_value: usize, max_string: usize) -> Self {
        assert!(
            max_key > 0 && max_value > 0 && max_string > 0,
            "info limits must be non-zero"
        );
        Self {
            max_key,
            max_value,
            max_string,
        }
    }

    /// Check whether a string of `len` bytes exceeds these limits
    #[must_use]
    pub const fn is_oversize(&self, len: usize) -> bool {
        len >= self.max_string
    }
}

impl Default for InfoLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Named capacity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SizeClass {
    /// Regular info strings such as user and server info
    #[default]
    Standard,
    /// Large info strings such as system info
    Big,
}

impl SizeClass {
    /// Limits of this class
    #[must_use]
    pub const fn limits(self) -> InfoLimits {
        match self {
            Self::Standard => InfoLimits::STANDARD,
            Self::Big => InfoLimits::BIG,
        }
    }
}

impl From<SizeClass> for InfoLimits {
    fn from(class: SizeClass) -> Self {
        class.limits()
    }
}
