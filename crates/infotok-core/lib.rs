//! # infotok core
//!
//! Session-aware text tokenizer, structured record parsers and the
//! `\key\value` info-string codec used by game configuration and network
//! metadata files.
//!
//! ## Features
//!
//! - **Explicit sessions**: line counter, checkpoint and diagnostics live in a
//!   [`ParseSession`] value, so concurrent parses never interfere
//! - **Bounded tokens**: over-long tokens are truncated and flagged instead of
//!   failing the read
//! - **Structured parsers**: brace skipping, parenthesized matrices and
//!   brace-delimited info records
//! - **Recoverable codec errors**: oversize and malformed info strings are
//!   reported as [`info::InfoError`] values
//! - **`no_std` ready**: only `alloc` is required with `default-features = false`
//!
//! ## Quick Start
//!
//! ```rust
//! use infotok_core::{parser::parse_info_block, Tokenizer};
//!
//! let source = r#"
//! // arena list
//! {
//!     map      q3dm17
//!     longname "The Longest Yard"
//! }
//! "#;
//!
//! let mut tokenizer = Tokenizer::new(source.as_bytes(), "arenas.txt");
//! let arenas = parse_info_block(&mut tokenizer, 64);
//!
//! assert_eq!(arenas[0].value_for_key("longname"), "The Longest Yard");
//! assert_eq!(arenas[0].as_str(), r"\map\q3dm17\longname\The Longest Yard");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod info;
pub mod parser;
pub mod tokenizer;
pub mod utils;

pub use info::{InfoError, InfoLimits, InfoString, SizeClass};
pub use parser::ParseError;
pub use tokenizer::{ParseOptions, ParseSession, Token, Tokenizer};
pub use utils::{CoreError, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
