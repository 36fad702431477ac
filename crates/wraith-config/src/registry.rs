//! The settings registry.
//!
//! One descriptor per named setting, in alphabetical order. The registry is
//! the single source of truth for names, kinds, alias namespaces, and
//! compiled-in defaults; the save path walks it in declaration order so the
//! settings file always comes out sorted.

use crate::alias::AliasSet;
use crate::keys::{
    KEY_DOWNARROW, KEY_LEFTARROW, KEY_RCTRL, KEY_RIGHTARROW, KEY_SPACE, KEY_UPARROW,
};
use crate::value::{KeyBinding, Value};

/// How a setting is stored, formatted, and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Keyboard binding persisted as a raw scancode.
    Key,
    Int,
    /// Integer always written as `0x`-prefixed hex, never aliased.
    IntHex,
    /// Integer written with a trailing `%`.
    IntPercent,
    Float,
    /// Float written with a trailing `%`.
    FloatPercent,
    /// Quoted string.
    String,
}

impl SettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::Key => "key",
            SettingKind::Int => "int",
            SettingKind::IntHex => "int_hex",
            SettingKind::IntPercent => "int_percent",
            SettingKind::Float => "float",
            SettingKind::FloatPercent => "float_percent",
            SettingKind::String => "string",
        }
    }

    pub fn all() -> [SettingKind; 7] {
        [
            SettingKind::Key,
            SettingKind::Int,
            SettingKind::IntHex,
            SettingKind::IntPercent,
            SettingKind::Float,
            SettingKind::FloatPercent,
            SettingKind::String,
        ]
    }
}

impl std::fmt::Display for SettingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compiled-in default, stored as `'static` data.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Int(i32),
    Float(f32),
    Str(&'static str),
    Key(i32),
}

/// One named setting.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub name: &'static str,
    pub kind: SettingKind,
    pub set: AliasSet,
    pub default: DefaultValue,
}

impl Descriptor {
    /// The default as a live value. Key defaults carry a key code, not a
    /// scancode, and start out marked as never loaded.
    pub fn default_value(&self) -> Value {
        match self.default {
            DefaultValue::Int(v) => Value::Int(v),
            DefaultValue::Float(v) => Value::Float(v),
            DefaultValue::Str(s) => Value::Str(s.to_string()),
            DefaultValue::Key(k) => Value::Key(KeyBinding::new(k)),
        }
    }
}

const fn bool_setting(name: &'static str, default: i32) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::Int,
        set: AliasSet::Bool,
        default: DefaultValue::Int(default),
    }
}

const fn int_setting(name: &'static str, set: AliasSet, default: i32) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::Int,
        set,
        default: DefaultValue::Int(default),
    }
}

const fn int_hex_setting(name: &'static str, default: i32) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::IntHex,
        set: AliasSet::None,
        default: DefaultValue::Int(default),
    }
}

const fn int_percent_setting(name: &'static str, default: i32) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::IntPercent,
        set: AliasSet::None,
        default: DefaultValue::Int(default),
    }
}

const fn float_setting(name: &'static str, set: AliasSet, default: f32) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::Float,
        set,
        default: DefaultValue::Float(default),
    }
}

const fn float_percent_setting(name: &'static str, default: f32) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::FloatPercent,
        set: AliasSet::None,
        default: DefaultValue::Float(default),
    }
}

const fn string_setting(name: &'static str, default: &'static str) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::String,
        set: AliasSet::None,
        default: DefaultValue::Str(default),
    }
}

const fn key_setting(name: &'static str, default: i32) -> Descriptor {
    Descriptor {
        name,
        kind: SettingKind::Key,
        set: AliasSet::Keyboard,
        default: DefaultValue::Key(default),
    }
}

/// Every persisted setting, alphabetical by name.
pub static REGISTRY: &[Descriptor] = &[
    bool_setting("am_external", 0),
    bool_setting("am_followmode", 1),
    bool_setting("am_grid", 0),
    string_setting("am_gridsize", "128x128"),
    bool_setting("am_path", 0),
    int_setting("annex", AliasSet::Annex, 0),
    int_setting("campaign", AliasSet::Campaign, 0),
    float_percent_setting("gp_deadzone_left", 24.0),
    float_percent_setting("gp_deadzone_right", 26.5),
    int_setting("gp_sensitivity", AliasSet::None, 64),
    bool_setting("gp_swapthumbsticks", 0),
    bool_setting("gp_vibrate", 1),
    key_setting("key_back", KEY_DOWNARROW),
    key_setting("key_fire", KEY_RCTRL),
    key_setting("key_forward", KEY_UPARROW),
    key_setting("key_left", KEY_LEFTARROW),
    key_setting("key_right", KEY_RIGHTARROW),
    key_setting("key_strafeleft", ',' as i32),
    key_setting("key_straferight", '.' as i32),
    key_setting("key_use", KEY_SPACE),
    float_setting("m_acceleration", AliasSet::None, 2.0),
    bool_setting("m_doubleclick_use", 0),
    bool_setting("m_invertyaxis", 0),
    bool_setting("m_novertical", 1),
    int_setting("m_sensitivity", AliasSet::None, 16),
    int_setting("mb_fire", AliasSet::Mouse, 0),
    int_setting("mb_use", AliasSet::Mouse, -1),
    bool_setting("pm_alwaysrun", 0),
    bool_setting("pm_centerweapon", 1),
    int_percent_setting("pm_walkbob", 75),
    bool_setting("r_decals", 1),
    int_setting("r_detail", AliasSet::Detail, 1),
    bool_setting("r_dither", 0),
    float_setting("r_gamma", AliasSet::Gamma, 0.75),
    bool_setting("r_hud", 1),
    bool_setting("r_liquid_ripple", 1),
    int_setting("r_lowpixelheight", AliasSet::None, 2),
    int_setting("r_lowpixelwidth", AliasSet::None, 2),
    int_setting("r_maxdecals", AliasSet::Decals, 256),
    bool_setting("r_shadows", 1),
    bool_setting("r_translucency", 1),
    int_setting("r_viewsize", AliasSet::None, 7),
    int_setting("runcount", AliasSet::None, 0),
    int_setting("s_channels", AliasSet::None, 32),
    int_percent_setting("s_musicvolume", 100),
    int_hex_setting("s_oplport", 0x388),
    int_percent_setting("s_sfxvolume", 100),
    string_setting("s_soundfont", "wraith.sf2"),
    int_setting("savegame", AliasSet::None, 0),
    int_setting("skilllevel", AliasSet::Skill, 2),
    int_setting("vid_display", AliasSet::None, 1),
    bool_setting("vid_fullscreen", 1),
    int_percent_setting("vid_motionblur", 0),
    string_setting("vid_scaledriver", "opengl"),
    string_setting("vid_scalefilter", "nearest"),
    int_setting("vid_screenheight", AliasSet::Display, 0),
    int_setting("vid_screenwidth", AliasSet::Display, 0),
    bool_setting("vid_vsync", 1),
    bool_setting("vid_widescreen", 0),
    int_setting("vid_windowheight", AliasSet::None, 480),
    string_setting("vid_windowposition", "centered"),
    int_setting("vid_windowwidth", AliasSet::None, 640),
];

/// Exact-match lookup. Setting names are case-sensitive.
pub fn find(name: &str) -> Option<&'static Descriptor> {
    REGISTRY.iter().find(|d| d.name == name)
}

/// Registry position for `name`, usable as a slot index.
pub fn find_index(name: &str) -> Option<usize> {
    REGISTRY.iter().position(|d| d.name == name)
}
