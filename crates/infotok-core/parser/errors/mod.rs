//! Parser error types
//!
//! Provides the `ParseError` enum for failures that stop a structured parse:
//! a token that does not match the expected literal, or a rewind with no
//! checkpoint to rewind to. Malformed records that parsing can skip are
//! reported as session diagnostics instead.

pub mod parse_error;

pub use parse_error::ParseError;
