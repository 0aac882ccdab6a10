//! Comprehensive tests for tokenizer functionality

use super::*;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

fn collect(source: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::from_str(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.parse();
        if token.is_empty() {
            break;
        }
        tokens.push(token.to_string_lossy().into_owned());
    }
    tokens
}

#[test]
fn tokenize_empty_string() {
    let mut tokenizer = Tokenizer::from_str("");
    assert!(tokenizer.parse().is_empty());
    assert!(tokenizer.is_exhausted());
}

#[test]
fn tokenize_whitespace_only() {
    let mut tokenizer = Tokenizer::from_str("  \t \r\n ");
    assert!(tokenizer.parse().is_empty());
    assert_eq!(tokenizer.line(), 1);
}

#[test]
fn line_comment_then_word() {
    let mut tokenizer = Tokenizer::from_str("// comment\nfoo");
    let start = tokenizer.line();
    assert_eq!(tokenizer.parse(), "foo");
    assert_eq!(tokenizer.line(), start + 1);
}

#[test]
fn block_comment_is_skipped() {
    assert_eq!(collect("a /* b c */ d"), ["a", "d"]);
    assert_eq!(collect("/**/x"), ["x"]);
}

#[test]
fn block_comment_counts_lines_by_default() {
    let mut tokenizer = Tokenizer::from_str("/* one\ntwo\n */ word");
    assert_eq!(tokenizer.parse(), "word");
    assert_eq!(tokenizer.line(), 2);
}

#[test]
fn block_comment_line_counting_can_be_disabled() {
    let options = ParseOptions::default().with_block_comment_lines(false);
    let session = ParseSession::with_options("t", options).unwrap();
    let mut tokenizer = Tokenizer::with_session(Cursor::from_str("/* a\nb */ c"), session);
    assert_eq!(tokenizer.parse(), "c");
    assert_eq!(tokenizer.line(), 0);
}

#[test]
fn newline_in_block_comment_is_not_a_line_break() {
    let mut tokenizer = Tokenizer::from_str("key /* wrapped\n comment */ value");
    assert_eq!(tokenizer.parse(), "key");
    assert_eq!(tokenizer.next_token(false), "value");
}

#[test]
fn unterminated_block_comment_exhausts() {
    let mut tokenizer = Tokenizer::from_str("a /* never closed");
    assert_eq!(tokenizer.parse(), "a");
    assert!(tokenizer.parse().is_empty());
    assert!(tokenizer.is_exhausted());
}

#[test]
fn slash_alone_is_a_word() {
    assert_eq!(collect("a / b"), ["a", "/", "b"]);
    assert_eq!(collect("path/to/file"), ["path/to/file"]);
}

#[test]
fn quoted_string_with_spaces() {
    assert_eq!(collect("say \"hello world\" now"), ["say", "hello world", "now"]);
}

#[test]
fn quoted_string_embedded_quote() {
    let mut tokenizer = Tokenizer::from_str("\"a\\\"b\"");
    assert_eq!(tokenizer.parse(), "a\"b");
    assert!(tokenizer.parse().is_empty());
}

#[test]
fn quoted_string_other_escapes_are_literal() {
    let mut tokenizer = Tokenizer::from_str(r#""tab\tnew\n""#);
    assert_eq!(tokenizer.parse(), r"tab\tnew\n");
}

#[test]
fn empty_quoted_string() {
    let mut tokenizer = Tokenizer::from_str("\"\" next");
    assert!(tokenizer.parse().is_empty());
    assert!(!tokenizer.is_exhausted());
    assert_eq!(tokenizer.parse(), "next");
}

#[test]
fn unterminated_quote_runs_to_end() {
    let mut tokenizer = Tokenizer::from_str("\"open ended");
    assert_eq!(tokenizer.parse(), "open ended");
    assert!(tokenizer.is_exhausted());
    assert!(tokenizer.parse().is_empty());
}

#[test]
fn quoted_string_counts_lines() {
    let mut tokenizer = Tokenizer::from_str("\"two\nlines\" after");
    assert_eq!(tokenizer.parse(), "two\nlines");
    assert_eq!(tokenizer.line(), 1);
    assert_eq!(tokenizer.parse(), "after");
}

#[test]
fn quoted_line_counting_can_be_disabled() {
    let options = ParseOptions::default().with_quoted_lines(false);
    let session = ParseSession::with_options("t", options).unwrap();
    let mut tokenizer = Tokenizer::with_session(Cursor::from_str("\"two\nlines\" after"), session);
    assert_eq!(tokenizer.parse(), "two\nlines");
    assert_eq!(tokenizer.line(), 0);
    assert_eq!(tokenizer.parse(), "after");
    assert_eq!(tokenizer.line(), 0);
}

#[test]
fn token_line_is_start_line() {
    let mut tokenizer = Tokenizer::from_str("a\n\nb");
    assert_eq!(tokenizer.parse().line(), 0);
    assert_eq!(tokenizer.parse().line(), 2);
}

#[test]
fn newline_after_word_counted_once() {
    let mut tokenizer = Tokenizer::from_str("foo\nbar\nbaz");
    assert_eq!(tokenizer.parse(), "foo");
    assert_eq!(tokenizer.line(), 1);
    assert_eq!(tokenizer.parse(), "bar");
    assert_eq!(tokenizer.line(), 2);
    assert_eq!(tokenizer.parse(), "baz");
    assert_eq!(tokenizer.line(), 2);
}

#[test]
fn line_break_policy_returns_empty_token() {
    let mut tokenizer = Tokenizer::from_str("key\nvalue");
    assert_eq!(tokenizer.parse(), "key");

    let token = tokenizer.next_token(false);
    assert!(token.is_empty());
    assert!(!tokenizer.is_exhausted());
    assert_eq!(tokenizer.remaining(), b"value");

    assert_eq!(tokenizer.next_token(false), "value");
    assert_eq!(tokenizer.line(), 1);
}

#[test]
fn line_break_policy_same_line() {
    let mut tokenizer = Tokenizer::from_str("key   value\nnext");
    assert_eq!(tokenizer.parse(), "key");
    assert_eq!(tokenizer.next_token(false), "value");
}

#[test]
fn line_break_after_comment_detected() {
    let mut tokenizer = Tokenizer::from_str("key // trailing\nnext");
    assert_eq!(tokenizer.parse(), "key");
    assert!(tokenizer.next_token(false).is_empty());
    assert_eq!(tokenizer.parse(), "next");
}

#[test]
fn control_bytes_are_whitespace() {
    assert_eq!(collect("a\x01\x1fb\tc"), ["a", "b", "c"]);
}

#[test]
fn input_stops_at_nul() {
    let mut tokenizer = Tokenizer::new(b"one\0two", "nul");
    assert_eq!(tokenizer.parse(), "one");
    assert!(tokenizer.parse().is_empty());
}

#[test]
fn high_bytes_are_word_bytes() {
    let mut tokenizer = Tokenizer::new(&[b'a', 0xE9, b'b', b' ', b'c'], "latin1");
    let token = tokenizer.parse();
    assert_eq!(token.as_bytes(), &[b'a', 0xE9, b'b']);
    assert!(token.as_str().is_none());
}

#[test]
fn long_word_is_truncated_silently() {
    let source = "x".repeat(MAX_TOKEN_CHARS + 50);
    let mut tokenizer = Tokenizer::from_str(&source);
    let token = tokenizer.parse();
    assert_eq!(token.len(), MAX_TOKEN_CHARS - 1);
    assert!(token.is_truncated());
    assert!(tokenizer.parse().is_empty());
}

#[test]
fn custom_token_capacity() {
    let options = ParseOptions::default().with_max_token_chars(4);
    let session = ParseSession::with_options("small", options).unwrap();
    let mut tokenizer = Tokenizer::with_session(Cursor::from_str("abcdef \"ghijk\" lm"), session);
    assert_eq!(tokenizer.parse(), "abc");
    assert_eq!(tokenizer.parse(), "ghi");
    let last = tokenizer.parse();
    assert_eq!(last, "lm");
    assert!(!last.is_truncated());
}

#[test]
fn unget_restores_line() {
    let mut tokenizer = Tokenizer::from_str("a\nb\nc");
    assert_eq!(tokenizer.parse(), "a");
    assert_eq!(tokenizer.parse(), "b");
    assert_eq!(tokenizer.line(), 2);

    tokenizer.unget().unwrap();
    assert_eq!(tokenizer.line(), 1);
    assert_eq!(tokenizer.parse(), "b");
    assert_eq!(tokenizer.line(), 2);
}

#[test]
fn unget_twice_is_error() {
    let mut tokenizer = Tokenizer::from_str("a b");
    let _ = tokenizer.parse();
    assert!(tokenizer.unget().is_ok());
    assert_eq!(
        tokenizer.unget(),
        Err(ParseError::NoCheckpoint { line: 0 })
    );
}

#[test]
fn unget_after_exhaustion() {
    let mut tokenizer = Tokenizer::from_str("last");
    assert_eq!(tokenizer.parse(), "last");
    assert!(tokenizer.parse().is_empty());
    assert!(tokenizer.is_exhausted());

    tokenizer.unget().unwrap();
    assert!(!tokenizer.is_exhausted());
    assert!(tokenizer.parse().is_empty());
}

#[test]
fn explicit_backup_and_restore() {
    let mut tokenizer = Tokenizer::from_str("x y z");
    let _ = tokenizer.parse();
    tokenizer.backup();
    tokenizer.skip_rest_of_line();
    assert!(tokenizer.remaining().is_empty());
    tokenizer.unget().unwrap();
    assert_eq!(tokenizer.parse(), "y");
}

#[test]
fn skip_rest_of_line_counts_newline() {
    let mut tokenizer = Tokenizer::from_str("ignored words here\nkept");
    tokenizer.skip_rest_of_line();
    assert_eq!(tokenizer.line(), 1);
    assert_eq!(tokenizer.parse(), "kept");
    assert_eq!(tokenizer.line(), 1);
}

#[test]
fn skip_rest_of_line_after_word_does_not_double_count() {
    let mut tokenizer = Tokenizer::from_str("word\nnext");
    assert_eq!(tokenizer.parse(), "word");
    assert_eq!(tokenizer.line(), 1);
    tokenizer.skip_rest_of_line();
    assert_eq!(tokenizer.line(), 1);
    assert_eq!(tokenizer.parse(), "next");
}

#[test]
fn skip_rest_of_line_without_newline() {
    let mut tokenizer = Tokenizer::from_str("no newline");
    tokenizer.skip_rest_of_line();
    assert!(tokenizer.remaining().is_empty());
    assert_eq!(tokenizer.line(), 0);
}

#[test]
fn set_line_is_unvalidated() {
    let mut tokenizer = Tokenizer::from_str("a\nb");
    tokenizer.set_line(100);
    let _ = tokenizer.parse();
    assert_eq!(tokenizer.line(), 101);
}

#[test]
fn braces_are_words_when_separated() {
    assert_eq!(collect("{ a }"), ["{", "a", "}"]);
    assert_eq!(collect("{a}"), ["{a}"]);
}
