//! Numeric conversions used by the structured parsers
//!
//! [`parse_float_lenient`] follows libc `atof` for decimal input: it converts
//! the longest numeric prefix it can find and yields `0.0` when there is
//! none, so a stray word inside a matrix degrades to zero instead of failing
//! the parse. Hexadecimal floats such as `0x1p3` are not recognized; only
//! their leading `0` is read.

/// Parse the longest floating-point prefix of `text`
///
/// Leading ASCII whitespace is skipped. Accepts an optional sign, decimal
/// digits with an optional fraction and exponent, and the words `inf`,
/// `infinity` and `nan` in any case. Anything unparsable yields `0.0`.
///
/// # Examples
///
/// ```rust
/// use infotok_core::utils::numeric::parse_float_lenient;
///
/// assert_eq!(parse_float_lenient(b"2.5"), 2.5);
/// assert_eq!(parse_float_lenient(b"  -3e2xyz"), -300.0);
/// assert_eq!(parse_float_lenient(b"x"), 0.0);
/// ```
#[must_use]
pub fn parse_float_lenient(text: &[u8]) -> f32 {
    let start = text
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(text.len());
    let text = &text[start..];

    let mut end = 0;
    if matches!(text.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if let Some(value) = parse_special(&text[end..]) {
        return if text.first() == Some(&b'-') {
            -value
        } else {
            value
        };
    }

    let int_digits = count_digits(&text[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if text.get(end) == Some(&b'.') {
        frac_digits = count_digits(&text[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(text.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(text.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&text[exp_end.min(text.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    core::str::from_utf8(&text[..end])
        .ok()
        .and_then(|prefix| prefix.parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Number of leading ASCII digits
fn count_digits(text: &[u8]) -> usize {
    text.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Recognize `inf`, `infinity` and `nan` (sign already stripped)
fn parse_special(text: &[u8]) -> Option<f32> {
    let starts_with = |word: &[u8]| {
        text.len() >= word.len() && text[..word.len()].eq_ignore_ascii_case(word)
    };

    if starts_with(b"nan") {
        Some(f32::NAN)
    } else if starts_with(b"inf") {
        Some(f32::INFINITY)
    } else {
        None
    }
}

/// Parse a `0x`-prefixed hexadecimal string
///
/// Returns `None` for an empty string, a missing `0x` prefix, any non-hex
/// digit after the prefix, or a value that does not fit in `i32`. `"0x"`
/// alone is zero.
///
/// # Examples
///
/// ```rust
/// use infotok_core::utils::numeric::hex_str_to_int;
///
/// assert_eq!(hex_str_to_int("0x1F"), Some(31));
/// assert_eq!(hex_str_to_int("1F"), None);
/// ```
#[must_use]
pub fn hex_str_to_int(text: &str) -> Option<i32> {
    let digits = text.strip_prefix("0x")?;

    digits.bytes().try_fold(0_i32, |acc, byte| {
        let digit = char::from(byte).to_digit(16)?;
        acc.checked_mul(16)?.checked_add(i32::try_from(digit).ok()?)
    })
}
