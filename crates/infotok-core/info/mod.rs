//! Info-string codec
//!
//! An info string is a flat `\key1\value1\key2\value2` encoding of key/value
//! pairs in one buffer. There is no escaping: `\`, `;` and `"` may not appear
//! in keys or values. The leading `\` is optional on input and always written
//! on output.
//!
//! Use the free functions in [`codec`] on raw strings, or [`InfoString`] for
//! an owned string bound to a size class.
//!
//! # Example
//!
//! ```rust
//! use infotok_core::info::{InfoString, SizeClass};
//!
//! let mut info = InfoString::new(SizeClass::Standard);
//! info.set_value_for_key("name", "UnnamedPlayer")?;
//! info.set_value_for_key("rate", "25000")?;
//!
//! assert_eq!(info.as_str(), r"\name\UnnamedPlayer\rate\25000");
//! assert_eq!(info.value_for_key("RATE"), "25000");
//! # Ok::<(), infotok_core::info::InfoError>(())
//! ```

pub mod codec;
pub mod errors;
pub mod limits;
pub mod pairs;

pub use codec::{remove_key, set_value_for_key, validate, value_for_key};
pub use errors::InfoError;
pub use limits::{InfoLimits, SizeClass};
pub use pairs::{next_pair, Pairs};

use alloc::string::String;
use core::fmt;

/// Owned info string that never exceeds its limits
///
/// Every mutation goes through the codec, so the wrapped string stays below
/// `limits().max_string` and lookups cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoString {
    /// Encoded pairs
    buf: String,
    /// Capacities enforced on every write
    limits: InfoLimits,
}

impl InfoString {
    /// Create an empty info string of the given size class
    #[must_use]
    pub const fn new(class: SizeClass) -> Self {
        Self::with_limits(class.limits())
    }

    /// Create an empty info string with custom limits
    #[must_use]
    pub const fn with_limits(limits: InfoLimits) -> Self {
        Self {
            buf: String::new(),
            limits,
        }
    }

    /// Wrap an already encoded string
    ///
    /// # Errors
    ///
    /// Returns [`InfoError::Oversize`] if `raw` does not fit `limits`.
    pub fn from_raw(raw: impl Into<String>, limits: impl Into<InfoLimits>) -> Result<Self, InfoError> {
        let buf = raw.into();
        let limits = limits.into();
        if limits.is_oversize(buf.len()) {
            return Err(InfoError::Oversize {
                len: buf.len(),
                limit: limits.max_string,
            });
        }
        Ok(Self { buf, limits })
    }

    /// Encoded form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Capacities of this string
    #[must_use]
    pub const fn limits(&self) -> &InfoLimits {
        &self.limits
    }

    /// Encoded length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check whether no pairs are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Value of the first pair keyed `key` (ASCII case-insensitive), or `""`
    #[must_use]
    pub fn value_for_key(&self, key: &str) -> &str {
        value_for_key(&self.buf, key, &self.limits).unwrap_or_default()
    }

    /// Set `key` to `value`, or remove it if `value` is empty
    ///
    /// # Errors
    ///
    /// See [`codec::set_value_for_key`]. The string stays within its limits
    /// on every error.
    pub fn set_value_for_key(&mut self, key: &str, value: &str) -> Result<(), InfoError> {
        set_value_for_key(&mut self.buf, key, value, &self.limits)
    }

    /// Remove the pair keyed `key` if present
    pub fn remove_key(&mut self, key: &str) {
        let removed = remove_key(&mut self.buf, key, &self.limits);
        debug_assert!(removed.is_ok(), "InfoString exceeded its limits: {removed:?}");
    }

    /// Check whether the string is safe to embed in a console command
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate(&self.buf)
    }

    /// Iterate over `(key, value)` pairs in stored order
    #[must_use]
    pub fn pairs(&self) -> Pairs<'_> {
        Pairs::new(&self.buf)
    }

    /// Remove all pairs
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Unwrap into the encoded string
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl AsRef<str> for InfoString {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

impl fmt::Display for InfoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl<'a> IntoIterator for &'a InfoString {
    type Item = (&'a str, &'a str);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}
