//! Separator-set scanning helpers for flat delimited strings

/// Skip every leading byte that belongs to `set`
///
/// ```rust
/// use infotok_core::utils::charset::skip_charset;
///
/// assert_eq!(skip_charset("  ,,name", " ,"), "name");
/// ```
#[must_use]
pub fn skip_charset<'a>(text: &'a str, set: &str) -> &'a str {
    text.trim_start_matches(|c: char| set.contains(c))
}

/// Skip `count` separator-delimited fields
///
/// A run of consecutive separator bytes counts as one boundary. Returns the
/// remainder after the `count`-th boundary, or `text` unchanged if it holds
/// fewer boundaries than requested.
///
/// ```rust
/// use infotok_core::utils::charset::skip_tokens;
///
/// assert_eq!(skip_tokens("a b  c d", 2, " "), "c d");
/// assert_eq!(skip_tokens("a b", 5, " "), "a b");
/// ```
#[must_use]
pub fn skip_tokens<'a>(text: &'a str, count: usize, set: &str) -> &'a str {
    let mut rest = text;
    let mut seen = 0;

    while seen < count {
        match rest.find(|c: char| set.contains(c)) {
            Some(pos) => {
                rest = skip_charset(&rest[pos..], set);
                seen += 1;
            }
            None => return text,
        }
    }

    rest
}
