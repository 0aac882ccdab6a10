//! Brace-delimited info records
//!
//! A record file is a sequence of `{ ... }` groups, each holding one
//! `key value` pair per line:
//!
//! ```text
//! {
//!     map     "q3dm1"
//!     longname "Arena Gate"
//!     type    ffa
//! }
//! ```
//!
//! Every group becomes one [`InfoString`]. Malformed input never fails the
//! parse: the problem is reported on the session and the records assembled so
//! far are returned.

use alloc::{string::ToString, vec::Vec};

use crate::{
    info::{InfoString, SizeClass},
    tokenizer::Tokenizer,
};

/// Value stored for a key with nothing after it on its line
pub const MISSING_VALUE: &str = "<NULL>";

/// Parse up to `max_records` standard-size records
///
/// See [`parse_info_block_with`] for the rules.
pub fn parse_info_block(tokenizer: &mut Tokenizer<'_>, max_records: usize) -> Vec<InfoString> {
    parse_info_block_with(tokenizer, max_records, SizeClass::Standard)
}

/// Parse up to `max_records` records of the given size class
///
/// Parsing stops at the end of input, or with a session error on:
///
/// - a token other than `{` where a record should start
///   (`Missing { in info file`)
/// - a `{` when `max_records` records were already read
///   (`Max infos exceeded`)
/// - end of input inside a record (`Unexpected end of info file`); the
///   partial record is still returned
///
/// Values are read without crossing a line break; a key alone on its line
/// gets the value [`MISSING_VALUE`]. Pairs the codec refuses are reported as
/// session warnings and skipped.
///
/// # Example
///
/// ```rust
/// use infotok_core::{info::SizeClass, parser::parse_info_block_with, tokenizer::Tokenizer};
///
/// let source = "{ name Sarge\n skill 4 }\n{ name Grunt\n }";
/// let mut tokenizer = Tokenizer::new(source.as_bytes(), "bots.txt");
/// let records = parse_info_block_with(&mut tokenizer, 16, SizeClass::Big);
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].value_for_key("skill"), "4");
/// assert_eq!(records[1].value_for_key("name"), "Grunt");
/// assert!(tokenizer.issues().is_empty());
/// ```
pub fn parse_info_block_with(
    tokenizer: &mut Tokenizer<'_>,
    max_records: usize,
    class: SizeClass,
) -> Vec<InfoString> {
    let mut records = Vec::new();

    loop {
        let token = tokenizer.parse();
        if token.is_empty() {
            break;
        }
        if token != "{" {
            tokenizer.session_mut().error("Missing { in info file");
            break;
        }
        if records.len() == max_records {
            tokenizer.session_mut().error("Max infos exceeded");
            break;
        }

        let mut record = InfoString::new(class);
        parse_record(tokenizer, &mut record);
        records.push(record);
    }

    tracing::debug!(
        source = tokenizer.session().source_name(),
        records = records.len(),
        "parsed info block"
    );
    records
}

/// Read `key value` lines up to the closing `}`
fn parse_record(tokenizer: &mut Tokenizer<'_>, record: &mut InfoString) {
    loop {
        let key = tokenizer.parse();
        if key.is_empty() {
            tokenizer.session_mut().error("Unexpected end of info file");
            return;
        }
        if key == "}" {
            return;
        }

        let value = tokenizer.next_token(false);
        let value = if value.is_empty() {
            MISSING_VALUE.into()
        } else {
            value.to_string_lossy()
        };

        if let Err(err) = record.set_value_for_key(&key.to_string_lossy(), &value) {
            tokenizer.session_mut().warning(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::IssueLevel;
    use pretty_assertions::assert_eq;

    fn messages<'t>(tokenizer: &'t Tokenizer<'_>) -> Vec<&'t str> {
        tokenizer
            .issues()
            .iter()
            .map(|issue| issue.message.as_str())
            .collect()
    }

    #[test]
    fn two_records() {
        let source = "{\n map q3dm1\n type ffa\n}\n{\n map q3dm2\n}\n";
        let mut tokenizer = Tokenizer::from_str(source);
        let records = parse_info_block(&mut tokenizer, 8);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_str(), r"\map\q3dm1\type\ffa");
        assert_eq!(records[1].as_str(), r"\map\q3dm2");
        assert!(tokenizer.issues().is_empty());
    }

    #[test]
    fn quoted_values() {
        let mut tokenizer = Tokenizer::from_str("{ longname \"Arena Gate\" }");
        let records = parse_info_block(&mut tokenizer, 1);
        assert_eq!(records[0].value_for_key("longname"), "Arena Gate");
    }

    #[test]
    fn key_without_value() {
        let mut tokenizer = Tokenizer::from_str("{\n flag\n name x\n}");
        let records = parse_info_block(&mut tokenizer, 1);
        assert_eq!(records[0].value_for_key("flag"), MISSING_VALUE);
        assert_eq!(records[0].value_for_key("name"), "x");
    }

    #[test]
    fn missing_open_brace() {
        let mut tokenizer = Tokenizer::from_str("{ a 1 }\nstray { b 2 }");
        let records = parse_info_block(&mut tokenizer, 8);
        assert_eq!(records.len(), 1);
        assert_eq!(messages(&tokenizer), ["Missing { in info file"]);
        assert_eq!(tokenizer.issues()[0].level, IssueLevel::Error);
        assert_eq!(tokenizer.issues()[0].line, 1);
    }

    #[test]
    fn max_records_exceeded() {
        let mut tokenizer = Tokenizer::from_str("{ a 1 } { a 2 } { a 3 }");
        let records = parse_info_block(&mut tokenizer, 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].value_for_key("a"), "2");
        assert_eq!(messages(&tokenizer), ["Max infos exceeded"]);
    }

    #[test]
    fn unexpected_end_keeps_partial_record() {
        let mut tokenizer = Tokenizer::from_str("{ a 1 } { b 2");
        let records = parse_info_block(&mut tokenizer, 8);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].as_str(), r"\b\2");
        assert_eq!(messages(&tokenizer), ["Unexpected end of info file"]);
    }

    #[test]
    fn refused_pair_is_warning() {
        let mut tokenizer = Tokenizer::from_str("{ cmd \"say;quit\" ok 1 }");
        let records = parse_info_block(&mut tokenizer, 1);
        assert_eq!(records[0].as_str(), r"\ok\1");
        assert_eq!(tokenizer.issues()[0].level, IssueLevel::Warning);
        assert_eq!(
            tokenizer.issues()[0].message,
            "Can't use keys or values with a semicolon"
        );
    }

    #[test]
    fn empty_input() {
        let mut tokenizer = Tokenizer::from_str("  // nothing here\n");
        assert!(parse_info_block(&mut tokenizer, 4).is_empty());
        assert!(tokenizer.issues().is_empty());
    }
}
