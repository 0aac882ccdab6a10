//! Byte classification predicates
//!
//! All predicates work on raw bytes and are ASCII-only: bytes above `0x7F`
//! belong to no class except [`CharClass::TOKEN`] (they are never whitespace
//! to the tokenizer).

bitflags::bitflags! {
    /// Classes a single byte can belong to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u16 {
        /// Printable ASCII, `0x20..=0x7E`
        const PRINTABLE = 1 << 0;
        /// `a..=z`
        const LOWER = 1 << 1;
        /// `A..=Z`
        const UPPER = 1 << 2;
        /// `0..=9`
        const DIGIT = 1 << 3;
        /// Letters, digits and `_`
        const FILENAME = 1 << 4;
        /// Shell or path metacharacters stripped from directory names
        const BAD_DIR = 1 << 5;
        /// Any byte `<= 0x20` other than NUL
        const SPACE = 1 << 6;
        /// Part of a bare word (`> 0x20`)
        const TOKEN = 1 << 7;
        /// Bytes that may never appear in an info-string key or value
        const INFO_RESERVED = 1 << 8;

        /// Letters of either case
        const ALPHA = Self::LOWER.bits() | Self::UPPER.bits();
        /// Letters and digits
        const ALPHANUMERIC = Self::ALPHA.bits() | Self::DIGIT.bits();
    }
}

/// Characters stripped by [`is_bad_dir_char`]
const BAD_DIR_CHARS: &[u8] = b";&()|<>*?[]~+@!\\/ '\"";

/// Characters that break info-string framing or downstream command parsing
pub const INFO_RESERVED_CHARS: &[u8] = b"\\;\"";

impl CharClass {
    /// Compute every class `byte` belongs to
    #[must_use]
    pub fn of(byte: u8) -> Self {
        let mut class = Self::empty();

        if (0x20..=0x7E).contains(&byte) {
            class |= Self::PRINTABLE;
        }
        if byte.is_ascii_lowercase() {
            class |= Self::LOWER;
        }
        if byte.is_ascii_uppercase() {
            class |= Self::UPPER;
        }
        if byte.is_ascii_digit() {
            class |= Self::DIGIT;
        }
        if byte.is_ascii_alphanumeric() || byte == b'_' {
            class |= Self::FILENAME;
        }
        if BAD_DIR_CHARS.contains(&byte) {
            class |= Self::BAD_DIR;
        }
        if byte != 0 && byte <= b' ' {
            class |= Self::SPACE;
        }
        if byte > b' ' {
            class |= Self::TOKEN;
        }
        if INFO_RESERVED_CHARS.contains(&byte) {
            class |= Self::INFO_RESERVED;
        }

        class
    }
}

/// Printable ASCII
#[must_use]
pub const fn is_print(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Lowercase ASCII letter
#[must_use]
pub const fn is_lower(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// Uppercase ASCII letter
#[must_use]
pub const fn is_upper(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

/// ASCII letter
#[must_use]
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// ASCII digit
#[must_use]
pub const fn is_numeric(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// ASCII letter or digit
#[must_use]
pub const fn is_alphanumeric(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Safe in a file name: letters, digits and `_`
#[must_use]
pub fn is_for_filename(byte: u8) -> bool {
    CharClass::of(byte).contains(CharClass::FILENAME)
}

/// Byte that must be stripped from a directory name
#[must_use]
pub fn is_bad_dir_char(byte: u8) -> bool {
    CharClass::of(byte).contains(CharClass::BAD_DIR)
}

/// Whitespace as the tokenizer sees it: any non-NUL byte `<= 0x20`
#[must_use]
pub const fn is_token_space(byte: u8) -> bool {
    byte != 0 && byte <= b' '
}

/// Byte that may not appear inside an info-string key or value
#[must_use]
pub fn is_info_reserved(byte: u8) -> bool {
    CharClass::of(byte).contains(CharClass::INFO_RESERVED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_range() {
        assert!(is_print(b' '));
        assert!(is_print(b'~'));
        assert!(!is_print(0x7F));
        assert!(!is_print(b'\n'));
    }

    #[test]
    fn letter_classes() {
        assert!(is_lower(b'q') && !is_upper(b'q'));
        assert!(is_upper(b'Q') && !is_lower(b'Q'));
        assert!(is_alpha(b'z') && !is_alpha(b'1'));
        assert!(is_alphanumeric(b'7'));
        assert!(CharClass::of(b'k').contains(CharClass::ALPHA));
        assert!(CharClass::of(b'4').contains(CharClass::ALPHANUMERIC));
    }

    #[test]
    fn filename_safe_bytes() {
        assert!(is_for_filename(b'_'));
        assert!(is_for_filename(b'a'));
        assert!(!is_for_filename(b' '));
        assert!(!is_for_filename(b'-'));
    }

    #[test]
    fn bad_dir_bytes() {
        for &b in b";&()|<>*?[]~+@!\\/ '\"" {
            assert!(is_bad_dir_char(b), "byte {b:#x} should be rejected");
        }
        assert!(!is_bad_dir_char(b'a'));
        assert!(!is_bad_dir_char(b'.'));
        assert!(!is_bad_dir_char(0));
    }

    #[test]
    fn token_space_excludes_nul() {
        assert!(is_token_space(b' '));
        assert!(is_token_space(b'\t'));
        assert!(is_token_space(b'\r'));
        assert!(!is_token_space(0));
        assert!(!is_token_space(b'a'));
        assert!(CharClass::of(0xC3).contains(CharClass::TOKEN));
    }

    #[test]
    fn info_reserved_bytes() {
        assert!(is_info_reserved(b'\\'));
        assert!(is_info_reserved(b';'));
        assert!(is_info_reserved(b'"'));
        assert!(!is_info_reserved(b'/'));
    }
}
