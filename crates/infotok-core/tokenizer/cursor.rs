//! Read cursor over a caller-owned, NUL-terminated byte buffer
//!
//! The cursor never owns the text. The readable region ends at the first NUL
//! byte or at the end of the slice, whichever comes first, so callers can hand
//! over C-style buffers with trailing garbage after the terminator.

/// Current read position inside a byte buffer
///
/// A cursor becomes *exhausted* once a token read runs into the end of the
/// buffer; every further read yields an empty token. Reaching the end while
/// finishing a bare word leaves the cursor at the end but not yet exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// Readable bytes, already cut at the first NUL
    data: &'a [u8],
    /// Byte offset of the next unread byte
    offset: usize,
    /// Set once a read hit the end of input
    exhausted: bool,
    /// The newline at `offset` was already added to the line counter
    newline_counted: bool,
}

/// Saved cursor state, detached from the buffer lifetime
///
/// Used by the session checkpoint so a [`super::ParseSession`] does not need
/// to borrow the text it tokenizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    /// Byte offset into the buffer
    pub offset: usize,
    /// Whether the cursor was exhausted
    pub exhausted: bool,
    /// Whether the newline under the cursor was already counted
    pub newline_counted: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `data`
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Self {
            data: &data[..end],
            offset: 0,
            exhausted: false,
            newline_counted: false,
        }
    }

    /// Create a cursor over UTF-8 text
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Byte offset of the next unread byte
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Check whether a read already ran off the end of the buffer
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Check whether every readable byte has been consumed
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Unread bytes, excluding the terminator
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset.min(self.data.len())..]
    }

    /// Readable length of the whole buffer
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the buffer has no readable bytes at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Byte under the cursor, or `0` at the end
    #[must_use]
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte `ahead` positions past the cursor, or `0` beyond the end
    #[must_use]
    pub fn peek_at(&self, ahead: usize) -> u8 {
        self.data.get(self.offset + ahead).copied().unwrap_or(0)
    }

    /// Move forward by `count` bytes, stopping at the end
    pub fn advance(&mut self, count: usize) {
        self.offset = (self.offset + count).min(self.data.len());
        self.newline_counted = false;
    }

    /// Mark the cursor as having run out of input
    pub fn exhaust(&mut self) {
        self.offset = self.data.len();
        self.exhausted = true;
        self.newline_counted = false;
    }

    /// Snapshot the cursor for a later [`Cursor::seek`]
    #[must_use]
    pub const fn position(&self) -> CursorPosition {
        CursorPosition {
            offset: self.offset,
            exhausted: self.exhausted,
            newline_counted: self.newline_counted,
        }
    }

    /// Return to a snapshot taken on this same buffer
    ///
    /// Offsets past the end are clamped.
    pub fn seek(&mut self, position: CursorPosition) {
        self.offset = position.offset.min(self.data.len());
        self.exhausted = position.exhausted;
        self.newline_counted = position.newline_counted;
    }

    /// Whether the newline under the cursor was already counted
    pub(crate) const fn newline_counted(&self) -> bool {
        self.newline_counted
    }

    /// Record that the newline under the cursor has been counted
    pub(crate) fn mark_newline_counted(&mut self) {
        self.newline_counted = self.peek() == b'\n';
    }
}
