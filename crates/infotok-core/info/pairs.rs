//! Pair-by-pair iteration over `\key\value` strings

use core::iter::FusedIterator;

/// Split the first pair off `s`
///
/// A single leading `\` is skipped. Returns `(key, value, rest)` where `rest`
/// starts at the separator in front of the next key. If `s` holds a key with
/// no value separator, the key runs to the end and the value is empty. An
/// empty input yields three empty slices.
///
/// # Example
///
/// ```rust
/// use infotok_core::info::next_pair;
///
/// let (key, value, rest) = next_pair(r"\name\Player\rate\25000");
/// assert_eq!((key, value, rest), ("name", "Player", r"\rate\25000"));
///
/// let (key, value, rest) = next_pair(rest);
/// assert_eq!((key, value, rest), ("rate", "25000", ""));
/// ```
#[must_use]
pub fn next_pair(s: &str) -> (&str, &str, &str) {
    let s = s.strip_prefix('\\').unwrap_or(s);

    let Some(key_end) = s.find('\\') else {
        return (s, "", "");
    };
    let key = &s[..key_end];
    let after_key = &s[key_end + 1..];

    let value_end = after_key.find('\\').unwrap_or(after_key.len());
    (key, &after_key[..value_end], &after_key[value_end..])
}

/// Iterator over the pairs of an info string
///
/// Iteration ends at the end of the string or at the first empty key, so a
/// trailing separator does not produce a phantom pair.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    rest: &'a str,
}

impl<'a> Pairs<'a> {
    /// Iterate over the pairs of `s`
    #[must_use]
    pub const fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    /// Unvisited tail of the string
    #[must_use]
    pub const fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (key, value, rest) = next_pair(self.rest);
        if key.is_empty() {
            self.rest = "";
            return None;
        }

        self.rest = rest;
        Some((key, value))
    }
}

impl FusedIterator for Pairs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    #[test]
    fn leading_separator_is_optional() {
        assert_eq!(next_pair(r"a\1\b\2"), ("a", "1", r"\b\2"));
        assert_eq!(next_pair(r"\a\1\b\2"), ("a", "1", r"\b\2"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(next_pair(""), ("", "", ""));
        assert_eq!(next_pair("\\"), ("", "", ""));
    }

    #[test]
    fn key_without_value() {
        assert_eq!(next_pair(r"\dangling"), ("dangling", "", ""));
        assert_eq!(next_pair(r"\k\"), ("k", "", ""));
    }

    #[test]
    fn empty_value_keeps_position() {
        assert_eq!(next_pair(r"\a\\b\2"), ("a", "", r"\b\2"));
    }

    #[test]
    fn iterate_all_pairs() {
        let pairs: Vec<_> = Pairs::new(r"\name\UnnamedPlayer\rate\25000\snaps\20").collect();
        assert_eq!(
            pairs,
            [("name", "UnnamedPlayer"), ("rate", "25000"), ("snaps", "20")]
        );
    }

    #[test]
    fn trailing_separator_ends_iteration() {
        let mut pairs = Pairs::new(r"\a\1\");
        assert_eq!(pairs.next(), Some(("a", "1")));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
        assert!(pairs.remainder().is_empty());
    }
}
