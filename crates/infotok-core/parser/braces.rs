//! Brace-balanced section skipping

use crate::tokenizer::Tokenizer;

/// Skip a `{ ... }` section, nested braces included
///
/// The next token is expected to be the opening brace. Returns the depth
/// left when skipping stopped: `0` once the matching `}` was consumed,
/// anything else when the input ran out first.
///
/// ```rust
/// use infotok_core::{parser::skip_braced_section, tokenizer::Tokenizer};
///
/// let mut tokenizer = Tokenizer::from_str("{ { } } rest");
/// assert_eq!(skip_braced_section(&mut tokenizer), 0);
/// assert_eq!(tokenizer.parse(), "rest");
/// ```
pub fn skip_braced_section(tokenizer: &mut Tokenizer<'_>) -> isize {
    skip_braced_section_depth(tokenizer, 0)
}

/// Skip tokens until the brace depth, starting at `depth`, returns to zero
///
/// Only tokens consisting of a single `{` or `}` change the depth; braces
/// glued to other bytes are ordinary words. At least one token is read even
/// when `depth` starts at zero. Running out of input is not an error: the
/// unbalanced depth is returned.
pub fn skip_braced_section_depth(tokenizer: &mut Tokenizer<'_>, mut depth: isize) -> isize {
    loop {
        let token = tokenizer.parse();
        if token.is_single(b'{') {
            depth += 1;
        } else if token.is_single(b'}') {
            depth -= 1;
        }

        if depth == 0 || tokenizer.is_exhausted() {
            return depth;
        }
    }
}
