//! Token scanning rules
//!
//! - Whitespace is any byte `<= 0x20`; newlines bump the session line.
//! - `//` comments run to the end of the line, `/* */` to the closing marker.
//! - A `"` opens a quoted string that ends at the next unescaped `"`; the
//!   two-byte sequence `\"` inside it stands for a literal quote.
//! - Everything else is a bare word: a run of bytes `> 0x20`.

use super::{
    cursor::Cursor,
    session::ParseSession,
    tokens::{Token, TokenBuffer},
};
use crate::utils::chars::is_token_space;

/// Read one token, updating the session checkpoint and line counter
pub(crate) fn next_token(
    session: &mut ParseSession,
    cursor: &mut Cursor<'_>,
    allow_line_breaks: bool,
) -> Token {
    session.backup(cursor);

    if cursor.is_exhausted() {
        return Token::empty(session.line());
    }

    let mut token = TokenBuffer::new(session.options().max_token_chars);
    let mut crossed_newline = false;

    loop {
        if !skip_whitespace(session, cursor, &mut crossed_newline) {
            cursor.exhaust();
            return token.finish(session.line());
        }

        if crossed_newline && !allow_line_breaks {
            return token.finish(session.line());
        }

        match (cursor.peek(), cursor.peek_at(1)) {
            (b'/', b'/') => skip_line_comment(cursor),
            (b'/', b'*') => skip_block_comment(session, cursor),
            _ => break,
        }
    }

    let line = session.line();
    if cursor.peek() == b'"' {
        scan_quoted(session, cursor, &mut token);
    } else {
        scan_word(session, cursor, &mut token);
    }

    token.finish(line)
}

/// Skip whitespace; returns `false` when the input ran out
fn skip_whitespace(
    session: &mut ParseSession,
    cursor: &mut Cursor<'_>,
    crossed_newline: &mut bool,
) -> bool {
    loop {
        let byte = cursor.peek();
        if cursor.is_at_end() {
            return false;
        }
        if !is_token_space(byte) {
            return true;
        }
        if byte == b'\n' {
            if !cursor.newline_counted() {
                session.bump_line();
            }
            *crossed_newline = true;
        }
        cursor.advance(1);
    }
}

/// Skip a `//` comment, leaving the cursor on the terminating newline
fn skip_line_comment(cursor: &mut Cursor<'_>) {
    cursor.advance(2);
    while !cursor.is_at_end() && cursor.peek() != b'\n' {
        cursor.advance(1);
    }
}

/// Skip a `/* */` comment including the closing marker
fn skip_block_comment(session: &mut ParseSession, cursor: &mut Cursor<'_>) {
    let count_lines = session.options().count_block_comment_lines;

    cursor.advance(2);
    while !cursor.is_at_end() && !(cursor.peek() == b'*' && cursor.peek_at(1) == b'/') {
        if count_lines && cursor.peek() == b'\n' {
            session.bump_line();
        }
        cursor.advance(1);
    }
    cursor.advance(2);
}

/// Copy a quoted string body; the cursor starts on the opening quote
fn scan_quoted(session: &mut ParseSession, cursor: &mut Cursor<'_>, token: &mut TokenBuffer) {
    let count_lines = session.options().count_quoted_lines;

    cursor.advance(1);
    loop {
        if cursor.is_at_end() {
            cursor.exhaust();
            return;
        }

        match (cursor.peek(), cursor.peek_at(1)) {
            (b'\\', b'"') => {
                token.push(b'"');
                cursor.advance(2);
            }
            (b'"', _) => {
                cursor.advance(1);
                return;
            }
            (byte, _) => {
                if count_lines && byte == b'\n' {
                    session.bump_line();
                }
                token.push(byte);
                cursor.advance(1);
            }
        }
    }
}

/// Copy a bare word; a newline right after it is counted immediately
fn scan_word(session: &mut ParseSession, cursor: &mut Cursor<'_>, token: &mut TokenBuffer) {
    loop {
        token.push(cursor.peek());
        cursor.advance(1);

        let next = cursor.peek();
        if next == b'\n' {
            session.bump_line();
            cursor.mark_newline_counted();
        }
        if next <= b' ' {
            return;
        }
    }
}

/// Advance past the next newline, counting it
pub(crate) fn skip_rest_of_line(session: &mut ParseSession, cursor: &mut Cursor<'_>) {
    while !cursor.is_at_end() {
        let byte = cursor.peek();
        let already_counted = cursor.newline_counted();
        cursor.advance(1);

        if byte == b'\n' {
            if !already_counted {
                session.bump_line();
            }
            return;
        }
    }
}
