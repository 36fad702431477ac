//! Value formatting for the settings file.
//!
//! Formatting is alias-first: when the current value has an alias in the
//! setting's namespace, the alias text is written instead of the number.
//! Hex settings are the exception and always write raw hex.

use crate::alias::{alias_text, AliasSet};
use crate::keys;
use crate::registry::{Descriptor, SettingKind};
use crate::value::{KeyBinding, Value};

/// Renders a float with fixed precision, then drops a single trailing zero.
///
/// Precision 2 always renders two decimals; any other precision renders one
/// decimal for fractional values and none for integral ones. The strip then
/// removes the final character when the text ends in `.X0`, so `1.50`
/// becomes `1.5` and `2.00` becomes `2.0`, while the variable class renders
/// integral values with no decimals at all.
pub fn strip_trailing_zero(value: f32, precision: usize) -> String {
    let decimals = if precision == 2 {
        2
    } else if value != value.trunc() {
        1
    } else {
        0
    };
    let mut result = format!("{value:.decimals$}");
    let bytes = result.as_bytes();
    let len = bytes.len();
    if len >= 4 && bytes[len - 3] == b'.' && bytes[len - 1] == b'0' {
        result.truncate(len - 1);
    }
    result
}

/// Formats a setting's current value exactly as the save path writes it.
pub fn format_value(descriptor: &Descriptor, value: &Value) -> String {
    match (descriptor.kind, value) {
        (SettingKind::String, Value::Str(s)) => format!("\"{s}\""),
        (SettingKind::IntHex, Value::Int(v)) => format!("0x{v:x}"),
        (SettingKind::Int, Value::Int(v)) => alias_text(*v, descriptor.set)
            .map(str::to_string)
            .unwrap_or_else(|| v.to_string()),
        (SettingKind::IntPercent, Value::Int(v)) => alias_text(*v, descriptor.set)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{v}%")),
        (SettingKind::Float, Value::Float(v)) => float_text(*v, descriptor.set, 2, ""),
        (SettingKind::FloatPercent, Value::Float(v)) => float_text(*v, descriptor.set, 1, "%"),
        (SettingKind::Key, Value::Key(b)) => key_text(*b, descriptor.set),
        // Slot and kind disagree; render the raw value so the line stays
        // well-formed.
        (_, Value::Int(v)) => v.to_string(),
        (_, Value::Float(v)) => strip_trailing_zero(*v, 2),
        (_, Value::Str(s)) => format!("\"{s}\""),
        (_, Value::Key(b)) => b.key.to_string(),
    }
}

fn float_text(value: f32, set: AliasSet, precision: usize, suffix: &str) -> String {
    if value == value.trunc() {
        if let Some(text) = alias_text(value as i32, set) {
            return text.to_string();
        }
    }
    format!("{}{}", strip_trailing_zero(value, precision), suffix)
}

/// A keyboard binding prefers its original raw scancode when the key has
/// not changed since load. A runtime-changed key is reverse-mapped through
/// the scancode table; a key no scancode produces is written as its raw
/// key code so the value field is never empty.
fn key_text(binding: KeyBinding, set: AliasSet) -> String {
    if binding.unchanged_since_load() {
        scancode_text(binding.untranslated, set)
    } else if let Some(scancode) = keys::find_scancode(binding.key) {
        scancode_text(scancode as i32, set)
    } else {
        binding.key.to_string()
    }
}

fn scancode_text(scancode: i32, set: AliasSet) -> String {
    if let Some(text) = alias_text(scancode, set) {
        return text.to_string();
    }
    let key = keys::translate(scancode);
    if keys::is_printable(key) {
        format!("'{}'", (key as u8) as char)
    } else {
        scancode.to_string()
    }
}

/// Renders a bind-line control token: single-character controls are
/// single-quoted, with `=` written as its shifted character.
pub fn bind_control_token(control: &str) -> String {
    let mut chars = control.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => format!("'{}'", if c == '=' { '+' } else { c }),
        _ => control.to_string(),
    }
}
