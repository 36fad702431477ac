//! Tagged storage for setting values.

use crate::keys::{self, INVALID_KEY};

/// Binding state for a keyboard setting.
///
/// The settings file stores raw scancodes; the engine acts on translated
/// key codes. Both are kept so an unchanged binding can be written back
/// exactly as it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Live, translated key code.
    pub key: i32,
    /// Raw scancode as read from the file; 0 when the value never came
    /// from a file.
    pub untranslated: i32,
    /// Translation computed at load time, used to detect runtime changes
    /// when saving.
    pub original_translated: i32,
}

impl KeyBinding {
    /// Binding for a compiled-in default key code.
    pub fn new(key: i32) -> Self {
        KeyBinding {
            key,
            untranslated: 0,
            original_translated: INVALID_KEY,
        }
    }

    /// Binding as produced by reading a raw scancode from a file.
    pub fn from_scancode(scancode: i32) -> Self {
        let translated = keys::translate(scancode);
        KeyBinding {
            key: translated,
            untranslated: scancode,
            original_translated: translated,
        }
    }

    /// Whether the live key still matches what the file produced.
    pub fn unchanged_since_load(&self) -> bool {
        self.untranslated != 0 && self.key == self.original_translated
    }
}

/// A setting's current value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Str(String),
    Key(KeyBinding),
}

impl Value {
    /// Short name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Key(_) => "key",
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<KeyBinding> {
        match self {
            Value::Key(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEY_RCTRL;

    #[test]
    fn default_binding_counts_as_runtime_changed() {
        let b = KeyBinding::new(KEY_RCTRL);
        assert!(!b.unchanged_since_load());
    }

    #[test]
    fn loaded_binding_round_trips_until_changed() {
        let mut b = KeyBinding::from_scancode(72);
        assert_eq!(b.key, crate::keys::KEY_UPARROW);
        assert_eq!(b.untranslated, 72);
        assert!(b.unchanged_since_load());

        b.key = 'w' as i32;
        assert!(!b.unchanged_since_load());
    }

    #[test]
    fn out_of_table_scancode_loads_as_invalid() {
        let b = KeyBinding::from_scancode(300);
        assert_eq!(b.key, INVALID_KEY);
        assert_eq!(b.untranslated, 300);
    }

    #[test]
    fn accessors_match_variants() {
        assert_eq!(Value::Int(5).as_int(), Some(5));
        assert_eq!(Value::Int(5).as_float(), None);
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Str("x".into()).kind_name(), "string");
    }
}
