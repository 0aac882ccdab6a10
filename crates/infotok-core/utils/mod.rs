//! Shared helpers for infotok
//!
//! Contains the byte classification predicates used by the tokenizer and the
//! info-string codec, permissive numeric conversions, separator-set helpers
//! and the crate-wide error types.

pub mod charset;
pub mod chars;
pub mod errors;
pub mod numeric;

pub use chars::CharClass;
pub use errors::{CoreError, ErrorCategory, Result};
pub use numeric::{hex_str_to_int, parse_float_lenient};
