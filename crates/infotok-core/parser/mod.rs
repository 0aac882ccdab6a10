//! Structured parsers driven by the tokenizer
//!
//! Each parser reads from a [`Tokenizer`](crate::tokenizer::Tokenizer) and
//! leaves it positioned just past what it consumed, so parsers compose with
//! each other and with hand-written token loops.
//!
//! - [`skip_braced_section`]: skip a `{ ... }` section, nested braces included
//! - [`parse_matrix`]: read parenthesized N-dimensional float matrices
//! - [`parse_info_block`]: read `{ key value ... }` groups into info strings

pub mod braces;
pub mod errors;
pub mod info_block;
pub mod matrix;

pub use braces::{skip_braced_section, skip_braced_section_depth};
pub use errors::ParseError;
pub use info_block::{parse_info_block, parse_info_block_with, MISSING_VALUE};
pub use matrix::{parse_1d_matrix, parse_2d_matrix, parse_3d_matrix, parse_matrix};

/// Result type for fallible structured parsers
pub type ParseResult<T> = core::result::Result<T, ParseError>;
