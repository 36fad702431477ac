//! Value parsing for the settings file.
//!
//! Parsing never fails: every recognizer falls through to the next, and a
//! value with no numeric content at all parses as zero. This keeps startup
//! total no matter what the file contains.

use crate::alias::{alias_value, AliasSet};
use crate::keys::SCAN_TO_KEY;

/// Longest prefix a numeric scan will consume, sign included.
const SCAN_WIDTH: usize = 10;

/// Parses integer text: alias, quoted character (as a raw scancode),
/// `0x` hex, then bounded decimal. Returns 0 when nothing matches.
pub fn parse_int(text: &str, set: AliasSet) -> i32 {
    if let Some(value) = alias_value(text, set) {
        return value;
    }

    // 'x' resolves to the scancode that produces the character.
    let bytes = text.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'\'' && bytes[2] == b'\'' {
        let wanted = bytes[1].to_ascii_lowercase() as i32;
        if let Some(scancode) = SCAN_TO_KEY.iter().position(|&k| k == wanted) {
            return scancode as i32;
        }
    }

    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return scan_hex(hex);
    }
    scan_decimal(text)
}

/// Parses float text: alias value as a float, else the longest leading
/// numeric prefix. Returns 0.0 when nothing matches.
pub fn parse_float(text: &str, set: AliasSet) -> f32 {
    if let Some(value) = alias_value(text, set) {
        return value as f32;
    }
    let prefix = float_prefix(text);
    prefix.parse::<f32>().unwrap_or(0.0)
}

fn scan_hex(digits: &str) -> i32 {
    let mut value: u64 = 0;
    let mut seen = 0;
    for c in digits.chars().take(SCAN_WIDTH) {
        match c.to_digit(16) {
            Some(d) => {
                value = value.wrapping_mul(16).wrapping_add(u64::from(d));
                seen += 1;
            }
            None => break,
        }
    }
    if seen == 0 {
        0
    } else {
        value as u32 as i32
    }
}

fn scan_decimal(text: &str) -> i32 {
    let mut chars = text.chars().take(SCAN_WIDTH).peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut seen = 0;
    for c in chars {
        match c.to_digit(10) {
            Some(d) => {
                value = value * 10 + i64::from(d);
                seen += 1;
            }
            None => break,
        }
    }
    if seen == 0 {
        return 0;
    }
    if negative {
        value = -value;
    }
    value as i32
}

/// The longest leading substring that still looks like a float literal:
/// sign, digits, fraction, optional exponent.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            b'e' | b'E' if seen_digit => {
                let mut exp = end + 1;
                if matches!(bytes.get(exp), Some(b'-') | Some(b'+')) {
                    exp += 1;
                }
                let mut exp_digits = 0;
                while matches!(bytes.get(exp), Some(b'0'..=b'9')) {
                    exp += 1;
                    exp_digits += 1;
                }
                if exp_digits > 0 {
                    end = exp;
                }
                break;
            }
            _ => break,
        }
        end += 1;
    }
    if seen_digit {
        &text[..end]
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEY_UPARROW;

    #[test]
    fn aliases_win_over_numbers() {
        assert_eq!(parse_int("on", AliasSet::Bool), 1);
        assert_eq!(parse_int("OFF", AliasSet::Bool), 0);
        assert_eq!(parse_int("unlimited", AliasSet::Decals), 32768);
        // The bool rows spell digits too; identical result either way.
        assert_eq!(parse_int("1", AliasSet::Bool), 1);
    }

    #[test]
    fn quoted_characters_resolve_to_scancodes() {
        assert_eq!(parse_int("'q'", AliasSet::Keyboard), 16);
        assert_eq!(parse_int("'Q'", AliasSet::Keyboard), 16);
        assert_eq!(parse_int("','", AliasSet::Keyboard), 51);
        // Characters no scancode produces fall through to the numeric
        // scans and come out zero.
        assert_eq!(parse_int("'~'", AliasSet::Keyboard), 0);
    }

    #[test]
    fn hex_and_decimal_scans() {
        assert_eq!(parse_int("0x388", AliasSet::None), 0x388);
        assert_eq!(parse_int("0X2a", AliasSet::None), 42);
        assert_eq!(parse_int("123", AliasSet::None), 123);
        assert_eq!(parse_int("-64", AliasSet::None), -64);
        assert_eq!(parse_int("+7", AliasSet::None), 7);
    }

    #[test]
    fn trailing_junk_is_ignored() {
        assert_eq!(parse_int("42abc", AliasSet::None), 42);
        assert_eq!(parse_int("0xffzz", AliasSet::None), 0xff);
    }

    #[test]
    fn garbage_parses_as_zero() {
        assert_eq!(parse_int("", AliasSet::None), 0);
        assert_eq!(parse_int("banana", AliasSet::None), 0);
        assert_eq!(parse_int("0x", AliasSet::None), 0);
        assert_eq!(parse_int("--5", AliasSet::None), 0);
    }

    #[test]
    fn decimal_scan_is_bounded() {
        // Only the first ten characters are considered.
        assert_eq!(parse_int("12345678901234", AliasSet::None), 1234567890);
    }

    #[test]
    fn float_aliases_and_prefixes() {
        assert_eq!(parse_float("off", AliasSet::Gamma), 1.0);
        assert_eq!(parse_float("0.75", AliasSet::None), 0.75);
        assert_eq!(parse_float("26.5garbage", AliasSet::None), 26.5);
        assert_eq!(parse_float("-1.5", AliasSet::None), -1.5);
        assert_eq!(parse_float("1e2", AliasSet::None), 100.0);
        assert_eq!(parse_float("nonsense", AliasSet::None), 0.0);
        assert_eq!(parse_float(".", AliasSet::None), 0.0);
    }

    #[test]
    fn keyboard_alias_feeds_key_translation() {
        let scancode = parse_int("up", AliasSet::Keyboard);
        assert_eq!(crate::keys::translate(scancode), KEY_UPARROW);
    }
}
