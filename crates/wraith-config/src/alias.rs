//! Symbolic aliases for setting values.
//!
//! An alias binds a keyword to an integer value within one namespace, so a
//! settings file can say `am_grid on` or `key_fire ctrl` instead of raw
//! numbers. Lookups are first-match in declaration order; text comparison
//! is ASCII case-insensitive.

/// Alias namespace. A setting opts into exactly one namespace; [`None`]
/// means raw values only.
///
/// [`None`]: AliasSet::None
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasSet {
    None,
    Bool,
    Gamepad,
    Keyboard,
    Mouse,
    Display,
    Detail,
    Decals,
    Campaign,
    Annex,
    Skill,
    Gamma,
}

impl AliasSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            AliasSet::None => "none",
            AliasSet::Bool => "bool",
            AliasSet::Gamepad => "gamepad",
            AliasSet::Keyboard => "keyboard",
            AliasSet::Mouse => "mouse",
            AliasSet::Display => "display",
            AliasSet::Detail => "detail",
            AliasSet::Decals => "decals",
            AliasSet::Campaign => "campaign",
            AliasSet::Annex => "annex",
            AliasSet::Skill => "skill",
            AliasSet::Gamma => "gamma",
        }
    }
}

struct Alias {
    text: &'static str,
    value: i32,
    set: AliasSet,
}

const fn alias(text: &'static str, value: i32, set: AliasSet) -> Alias {
    Alias { text, value, set }
}

/// The alias table. Keyboard aliases map to raw scancodes, not key codes;
/// the `'+'` row covers the `=` key, whose saved form is the shifted
/// character.
static ALIASES: &[Alias] = &[
    // bool
    alias("off", 0, AliasSet::Bool),
    alias("on", 1, AliasSet::Bool),
    alias("0", 0, AliasSet::Bool),
    alias("1", 1, AliasSet::Bool),
    alias("no", 0, AliasSet::Bool),
    alias("yes", 1, AliasSet::Bool),
    alias("false", 0, AliasSet::Bool),
    alias("true", 1, AliasSet::Bool),
    // gamepad buttons (bitmask values)
    alias("-", 0, AliasSet::Gamepad),
    alias("none", 0, AliasSet::Gamepad),
    alias("dpadup", 1, AliasSet::Gamepad),
    alias("dpaddown", 2, AliasSet::Gamepad),
    alias("dpadleft", 4, AliasSet::Gamepad),
    alias("dpadright", 8, AliasSet::Gamepad),
    alias("start", 16, AliasSet::Gamepad),
    alias("back", 32, AliasSet::Gamepad),
    alias("leftthumb", 64, AliasSet::Gamepad),
    alias("rightthumb", 128, AliasSet::Gamepad),
    alias("leftshoulder", 256, AliasSet::Gamepad),
    alias("LS", 256, AliasSet::Gamepad),
    alias("leftbutton", 256, AliasSet::Gamepad),
    alias("LB", 256, AliasSet::Gamepad),
    alias("rightshoulder", 512, AliasSet::Gamepad),
    alias("RS", 512, AliasSet::Gamepad),
    alias("rightbutton", 512, AliasSet::Gamepad),
    alias("RB", 512, AliasSet::Gamepad),
    alias("lefttrigger", 1024, AliasSet::Gamepad),
    alias("LT", 1024, AliasSet::Gamepad),
    alias("righttrigger", 2048, AliasSet::Gamepad),
    alias("RT", 2048, AliasSet::Gamepad),
    alias("gamepad1", 4096, AliasSet::Gamepad),
    alias("gamepad2", 8192, AliasSet::Gamepad),
    alias("gamepad3", 16384, AliasSet::Gamepad),
    alias("gamepad4", 32768, AliasSet::Gamepad),
    // keyboard (raw scancodes)
    alias("-", 0, AliasSet::Keyboard),
    alias("none", 0, AliasSet::Keyboard),
    alias("'+'", 13, AliasSet::Keyboard),
    alias("backspace", 14, AliasSet::Keyboard),
    alias("tab", 15, AliasSet::Keyboard),
    alias("enter", 28, AliasSet::Keyboard),
    alias("ctrl", 29, AliasSet::Keyboard),
    alias("shift", 42, AliasSet::Keyboard),
    alias("alt", 56, AliasSet::Keyboard),
    alias("space", 57, AliasSet::Keyboard),
    alias("capslock", 58, AliasSet::Keyboard),
    alias("home", 71, AliasSet::Keyboard),
    alias("up", 72, AliasSet::Keyboard),
    alias("pageup", 73, AliasSet::Keyboard),
    alias("left", 75, AliasSet::Keyboard),
    alias("right", 77, AliasSet::Keyboard),
    alias("end", 79, AliasSet::Keyboard),
    alias("down", 80, AliasSet::Keyboard),
    alias("pagedown", 81, AliasSet::Keyboard),
    alias("insert", 82, AliasSet::Keyboard),
    alias("del", 83, AliasSet::Keyboard),
    // mouse buttons
    alias("-", -1, AliasSet::Mouse),
    alias("none", -1, AliasSet::Mouse),
    alias("left", 0, AliasSet::Mouse),
    alias("mouse1", 0, AliasSet::Mouse),
    alias("middle", 1, AliasSet::Mouse),
    alias("mouse2", 1, AliasSet::Mouse),
    alias("right", 2, AliasSet::Mouse),
    alias("mouse3", 2, AliasSet::Mouse),
    alias("mouse4", 3, AliasSet::Mouse),
    alias("mouse5", 4, AliasSet::Mouse),
    alias("mouse6", 5, AliasSet::Mouse),
    alias("mouse7", 6, AliasSet::Mouse),
    alias("mouse8", 7, AliasSet::Mouse),
    alias("wheelup", 8, AliasSet::Mouse),
    alias("wheeldown", 9, AliasSet::Mouse),
    // display
    alias("desktop", 0, AliasSet::Display),
    // render detail
    alias("low", 0, AliasSet::Detail),
    alias("high", 1, AliasSet::Detail),
    // decal cap
    alias("-", 0, AliasSet::Decals),
    alias("unlimited", 32768, AliasSet::Decals),
    // campaign titles (quotes are part of the alias text)
    alias("\"Cradle of Ash\"", 0, AliasSet::Campaign),
    alias("\"Hollow Ramparts\"", 1, AliasSet::Campaign),
    alias("\"The Sunken Choir\"", 2, AliasSet::Campaign),
    alias("\"Gravemarch\"", 3, AliasSet::Campaign),
    // annex campaigns
    alias("\"Ashfall\"", 0, AliasSet::Annex),
    alias("\"The Pale Court\"", 1, AliasSet::Annex),
    // skill names
    alias("\"Drifting\"", 0, AliasSet::Skill),
    alias("\"Haunting\"", 1, AliasSet::Skill),
    alias("\"Stalking\"", 2, AliasSet::Skill),
    alias("\"Relentless\"", 3, AliasSet::Skill),
    alias("\"Wraithborn\"", 4, AliasSet::Skill),
    // gamma shorthand
    alias("off", 1, AliasSet::Gamma),
];

/// Resolves alias text to its value within `set`.
pub fn alias_value(text: &str, set: AliasSet) -> Option<i32> {
    ALIASES
        .iter()
        .find(|a| a.set == set && a.text.eq_ignore_ascii_case(text))
        .map(|a| a.value)
}

/// Finds the first alias text for `value` within `set`.
pub fn alias_text(value: i32, set: AliasSet) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|a| a.set == set && a.value == value)
        .map(|a| a.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_aliases_resolve_both_directions() {
        assert_eq!(alias_value("on", AliasSet::Bool), Some(1));
        assert_eq!(alias_value("TRUE", AliasSet::Bool), Some(1));
        assert_eq!(alias_value("No", AliasSet::Bool), Some(0));
        // First match wins: 0 formats as "off", not "no" or "false".
        assert_eq!(alias_text(0, AliasSet::Bool), Some("off"));
        assert_eq!(alias_text(1, AliasSet::Bool), Some("on"));
    }

    #[test]
    fn gamepad_synonyms_share_values() {
        assert_eq!(alias_value("LB", AliasSet::Gamepad), Some(256));
        assert_eq!(alias_value("lb", AliasSet::Gamepad), Some(256));
        assert_eq!(alias_value("leftbutton", AliasSet::Gamepad), Some(256));
        assert_eq!(alias_text(256, AliasSet::Gamepad), Some("leftshoulder"));
        assert_eq!(alias_text(2048, AliasSet::Gamepad), Some("righttrigger"));
    }

    #[test]
    fn keyboard_aliases_are_scancodes() {
        assert_eq!(alias_value("up", AliasSet::Keyboard), Some(72));
        assert_eq!(alias_value("'+'", AliasSet::Keyboard), Some(13));
        assert_eq!(alias_text(13, AliasSet::Keyboard), Some("'+'"));
        assert_eq!(alias_text(0, AliasSet::Keyboard), Some("-"));
    }

    #[test]
    fn sets_do_not_leak_into_each_other() {
        assert_eq!(alias_value("off", AliasSet::Gamepad), None);
        assert_eq!(alias_value("off", AliasSet::Gamma), Some(1));
        assert_eq!(alias_value("dpadup", AliasSet::Keyboard), None);
        assert_eq!(alias_value("anything", AliasSet::None), None);
    }

    #[test]
    fn mouse_unbound_is_negative_one() {
        assert_eq!(alias_value("-", AliasSet::Mouse), Some(-1));
        assert_eq!(alias_text(-1, AliasSet::Mouse), Some("-"));
        assert_eq!(alias_value("wheeldown", AliasSet::Mouse), Some(9));
    }

    #[test]
    fn quoted_titles_match_with_quotes() {
        assert_eq!(alias_value("\"Gravemarch\"", AliasSet::Campaign), Some(3));
        assert_eq!(alias_value("Gravemarch", AliasSet::Campaign), None);
        assert_eq!(alias_text(4, AliasSet::Skill), Some("\"Wraithborn\""));
    }
}
