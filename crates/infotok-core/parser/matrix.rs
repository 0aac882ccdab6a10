//! Parenthesized numeric matrices
//!
//! Every nesting level is wrapped in `(` and `)`; the innermost level holds
//! the numbers. A 2x3 matrix reads `( ( 1 2 3 ) ( 4 5 6 ) )`. Numbers are
//! converted leniently, so a non-numeric token becomes `0.0`.

use alloc::{string::String, vec::Vec};

use super::{ParseError, ParseResult};
use crate::{tokenizer::Tokenizer, utils::numeric::parse_float_lenient};

/// Parse an N-dimensional matrix into a flat row-major vector
///
/// `dims` lists the size of each level, outermost first. The result holds
/// the product of all dimensions.
///
/// # Errors
///
/// Returns [`ParseError::TokenMismatch`] when a `(` or `)` is missing, or
/// when the input runs out before every value was read. Dimensions whose
/// product does not fit in `usize` are not an error by themselves; such a
/// matrix simply cannot be completed by any input.
///
/// # Panics
///
/// Panics if `dims` is empty.
///
/// # Example
///
/// ```rust
/// use infotok_core::{parser::parse_matrix, tokenizer::Tokenizer};
///
/// let mut tokenizer = Tokenizer::from_str("( ( 1 0 ) ( 0 1 ) )");
/// let identity = parse_matrix(&mut tokenizer, &[2, 2])?;
/// assert_eq!(identity, [1.0, 0.0, 0.0, 1.0]);
/// # Ok::<(), infotok_core::parser::ParseError>(())
/// ```
pub fn parse_matrix(tokenizer: &mut Tokenizer<'_>, dims: &[usize]) -> ParseResult<Vec<f32>> {
    assert!(!dims.is_empty(), "matrix needs at least one dimension");

    let expected = dims
        .iter()
        .try_fold(1_usize, |total, &dim| total.checked_mul(dim))
        .unwrap_or(0);
    // Each value needs at least one input byte
    let mut values = Vec::with_capacity(expected.min(tokenizer.remaining().len()));
    parse_level(tokenizer, dims, &mut values)?;
    Ok(values)
}

/// Parse one bracketed level, appending numbers to `out`
fn parse_level(
    tokenizer: &mut Tokenizer<'_>,
    dims: &[usize],
    out: &mut Vec<f32>,
) -> ParseResult<()> {
    tokenizer.match_token("(")?;

    match dims {
        [count] => {
            for _ in 0..*count {
                let token = tokenizer.parse();
                if tokenizer.is_exhausted() {
                    return Err(ParseError::TokenMismatch {
                        expected: ")".into(),
                        found: String::new(),
                        line: tokenizer.line(),
                    });
                }
                out.push(parse_float_lenient(token.as_bytes()));
            }
        }
        [count, inner @ ..] => {
            for _ in 0..*count {
                parse_level(tokenizer, inner, out)?;
            }
        }
        [] => {}
    }

    tokenizer.match_token(")")
}

/// Parse `( x0 x1 ... )`
///
/// # Errors
///
/// See [`parse_matrix`].
pub fn parse_1d_matrix(tokenizer: &mut Tokenizer<'_>, x: usize) -> ParseResult<Vec<f32>> {
    parse_matrix(tokenizer, &[x])
}

/// Parse `y` rows of `x` numbers
///
/// # Errors
///
/// See [`parse_matrix`].
pub fn parse_2d_matrix(
    tokenizer: &mut Tokenizer<'_>,
    y: usize,
    x: usize,
) -> ParseResult<Vec<f32>> {
    parse_matrix(tokenizer, &[y, x])
}

/// Parse `z` planes of `y` rows of `x` numbers
///
/// # Errors
///
/// See [`parse_matrix`].
pub fn parse_3d_matrix(
    tokenizer: &mut Tokenizer<'_>,
    z: usize,
    y: usize,
    x: usize,
) -> ParseResult<Vec<f32>> {
    parse_matrix(tokenizer, &[z, y, x])
}
