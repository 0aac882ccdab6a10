//! Comment and whitespace compaction for script buffers
//!
//! Produces a copy of a buffer with comments removed and whitespace runs
//! squeezed, which makes embedded scripts cheaper to store and to tokenize
//! again later. Quoted strings are copied byte for byte.

use alloc::vec::Vec;

/// Strip comments and collapse whitespace
///
/// - `//` comments are dropped up to (not including) the newline.
/// - `/* */` comments are dropped including both markers. The search for
///   `*/` starts at the opening `*`, so `/*/` is a complete comment.
/// - A run of `\n`/`\r` becomes a single `\n`, a run of spaces/tabs a
///   single space. Pending separators are only written in front of a
///   following non-whitespace byte, so trailing whitespace disappears.
/// - Quoted strings are copied unchanged up to and including the closing
///   quote.
///
/// Input stops at the first NUL byte.
///
/// # Example
///
/// ```rust
/// use infotok_core::tokenizer::compress;
///
/// let packed = compress(b"set a   1 // note\n\n\nset b \"x  y\"");
/// assert_eq!(packed, b"set a 1\nset b \"x  y\"");
/// ```
#[must_use]
pub fn compress(data: &[u8]) -> Vec<u8> {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let data = &data[..end];

    let mut out = Vec::with_capacity(data.len());
    let mut pending_newline = false;
    let mut pending_space = false;
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        let next = data.get(i + 1).copied();

        match (byte, next) {
            (b'/', Some(b'/')) => {
                while i < data.len() && data[i] != b'\n' {
                    i += 1;
                }
            }
            (b'/', Some(b'*')) => {
                // The closing marker may share the `*` of the opener: `/*/`
                i += 1;
                while i < data.len() && !(data[i] == b'*' && data.get(i + 1) == Some(&b'/')) {
                    i += 1;
                }
                i = (i + 2).min(data.len());
            }
            (b'\n' | b'\r', _) => {
                pending_newline = true;
                i += 1;
            }
            (b' ' | b'\t', _) => {
                pending_space = true;
                i += 1;
            }
            _ => {
                if pending_newline {
                    out.push(b'\n');
                    pending_newline = false;
                    pending_space = false;
                }
                if pending_space {
                    out.push(b' ');
                    pending_space = false;
                }

                if byte == b'"' {
                    let close = data[i + 1..]
                        .iter()
                        .position(|&b| b == b'"')
                        .map_or(data.len(), |pos| i + 1 + pos + 1);
                    out.extend_from_slice(&data[i..close]);
                    i = close;
                } else {
                    out.push(byte);
                    i += 1;
                }
            }
        }
    }

    out
}
