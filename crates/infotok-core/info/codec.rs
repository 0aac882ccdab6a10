//! Operations on raw `\key\value` strings
//!
//! These free functions work on any `str`/`String` together with an explicit
//! [`InfoLimits`]. [`super::InfoString`] wraps them for owned strings that
//! carry their own size class.

use alloc::string::String;

use super::{errors::InfoError, limits::InfoLimits, pairs::next_pair};
use crate::utils::chars::INFO_RESERVED_CHARS;

/// Look up the value of `key`
///
/// Keys compare ASCII case-insensitively and the first matching pair wins.
/// A missing key, an empty `key` or an empty string all give `""`.
///
/// # Errors
///
/// Returns [`InfoError::Oversize`] if `s` reaches `limits.max_string`.
///
/// # Example
///
/// ```rust
/// use infotok_core::info::{value_for_key, InfoLimits};
///
/// let info = r"\Name\Player\Rate\25000";
/// assert_eq!(value_for_key(info, "rate", &InfoLimits::STANDARD)?, "25000");
/// assert_eq!(value_for_key(info, "snaps", &InfoLimits::STANDARD)?, "");
/// # Ok::<(), infotok_core::info::InfoError>(())
/// ```
pub fn value_for_key<'s>(s: &'s str, key: &str, limits: &InfoLimits) -> Result<&'s str, InfoError> {
    check_size(s, limits)?;

    if key.is_empty() {
        return Ok("");
    }

    let mut rest = s;
    while !rest.is_empty() {
        let (pair_key, value, tail) = next_pair(rest);
        if pair_key.eq_ignore_ascii_case(key) {
            return Ok(value);
        }
        rest = tail;
    }

    Ok("")
}

/// Remove the first pair whose key matches `key`
///
/// Remaining pairs keep their order. A key containing `\` can never match
/// and leaves `s` untouched, as does a key that is not present.
///
/// # Errors
///
/// Returns [`InfoError::Oversize`] if `s` reaches `limits.max_string`;
/// `s` is not modified.
pub fn remove_key(s: &mut String, key: &str, limits: &InfoLimits) -> Result<(), InfoError> {
    check_size(s, limits)?;

    if key.contains('\\') {
        return Ok(());
    }

    if let Some(range) = find_pair(s, key) {
        s.replace_range(range, "");
    }
    Ok(())
}

/// Set `key` to `value`, replacing any existing pair
///
/// The new pair is appended at the end. An empty `value` only removes the key.
///
/// # Errors
///
/// - [`InfoError::Oversize`] if `s` already reaches `limits.max_string`.
/// - [`InfoError::ForbiddenCharacter`] if `key` or `value` contains `\`,
///   `;` or `"`.
/// - [`InfoError::EmptyKey`], [`InfoError::KeyTooLong`] or
///   [`InfoError::ValueTooLong`] for keys and values that cannot be stored.
///
/// In these cases `s` is unchanged. [`InfoError::Overflow`] is returned when
/// the appended pair would reach `limits.max_string`; by then any old pair
/// for `key` has already been removed.
///
/// # Example
///
/// ```rust
/// use infotok_core::info::{set_value_for_key, InfoLimits};
///
/// let mut info = String::from(r"\name\Player\rate\25000");
/// set_value_for_key(&mut info, "name", "Other", &InfoLimits::STANDARD)?;
/// assert_eq!(info, r"\rate\25000\name\Other");
/// # Ok::<(), infotok_core::info::InfoError>(())
/// ```
pub fn set_value_for_key(
    s: &mut String,
    key: &str,
    value: &str,
    limits: &InfoLimits,
) -> Result<(), InfoError> {
    check_size(s, limits)?;

    if let Err(err) = check_pair(key, value, limits) {
        tracing::warn!(key, "{err}");
        return Err(err);
    }

    remove_key(s, key, limits)?;
    if value.is_empty() {
        return Ok(());
    }

    let needed = s.len() + key.len() + value.len() + 2;
    if limits.is_oversize(needed) {
        tracing::warn!(key, needed, limit = limits.max_string, "Info string length exceeded");
        return Err(InfoError::Overflow {
            needed,
            limit: limits.max_string,
        });
    }

    s.reserve(key.len() + value.len() + 2);
    s.push('\\');
    s.push_str(key);
    s.push('\\');
    s.push_str(value);
    Ok(())
}

/// Check that `s` contains neither `"` nor `;`
///
/// Those bytes would break console command parsing of the string.
#[must_use]
pub fn validate(s: &str) -> bool {
    !s.contains(['"', ';'])
}

fn check_size(s: &str, limits: &InfoLimits) -> Result<(), InfoError> {
    if limits.is_oversize(s.len()) {
        return Err(InfoError::Oversize {
            len: s.len(),
            limit: limits.max_string,
        });
    }
    Ok(())
}

fn check_pair(key: &str, value: &str, limits: &InfoLimits) -> Result<(), InfoError> {
    for &reserved in INFO_RESERVED_CHARS {
        if key.as_bytes().contains(&reserved) || value.as_bytes().contains(&reserved) {
            return Err(InfoError::ForbiddenCharacter {
                ch: char::from(reserved),
            });
        }
    }

    if key.is_empty() {
        return Err(InfoError::EmptyKey);
    }
    if key.len() >= limits.max_key {
        return Err(InfoError::KeyTooLong {
            len: key.len(),
            limit: limits.max_key,
        });
    }
    if value.len() >= limits.max_value {
        return Err(InfoError::ValueTooLong {
            len: value.len(),
            limit: limits.max_value,
        });
    }
    Ok(())
}

/// Byte range of the first pair keyed `key`, including its leading separator
fn find_pair(s: &str, key: &str) -> Option<core::ops::Range<usize>> {
    let mut start = 0;
    while start < s.len() {
        let (pair_key, _, tail) = next_pair(&s[start..]);
        let end = s.len() - tail.len();
        if pair_key.eq_ignore_ascii_case(key) {
            return Some(start..end);
        }
        start = end;
    }
    None
}
