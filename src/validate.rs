//! Pure input checks shared by the CLI and the library entry points.

use crate::foundation::core::{Bound, Rgb8};
use crate::foundation::error::{PlaceholderError, PlaceholderResult};

pub fn validate_range(value: i64, bound: Bound) -> bool {
    bound.contains(value)
}

/// Exactly two components, each inside `bound`.
pub fn validate_ratio(values: &[i64], bound: Bound) -> bool {
    values.len() == 2 && values.iter().all(|&v| validate_range(v, bound))
}

/// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` (case-insensitive).
pub fn validate_hex_color(text: &str) -> bool {
    parse_hex_color(text).is_ok()
}

/// Parses the same grammar as [`validate_hex_color`]. Shorthand digits are doubled and the
/// alpha pair, when present, is dropped.
pub fn parse_hex_color(text: &str) -> PlaceholderResult<Rgb8> {
    let invalid = || PlaceholderError::invalid_color(format!("\"{text}\""));

    let digits = text.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    // All bytes are ASCII hex digits, so byte slicing is char-aligned.
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map_err(|_| invalid());
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

    match digits.len() {
        3 | 4 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Ok(Rgb8::new(r * 0x11, g * 0x11, b * 0x11))
        }
        6 | 8 => Ok(Rgb8::new(byte(0)?, byte(2)?, byte(4)?)),
        _ => Err(invalid()),
    }
}
