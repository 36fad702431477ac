//! Key codes and the scancode translation table.
//!
//! Settings files store keyboard bindings as raw PC scancodes. The engine
//! works with translated key codes: printable keys use their ASCII value,
//! everything else uses values above 127 so the two ranges never collide.

/// Key code for a scancode with no engine mapping.
pub const INVALID_KEY: i32 = -1;

pub const KEY_ESCAPE: i32 = 27;
pub const KEY_TAB: i32 = 9;
pub const KEY_ENTER: i32 = 13;
pub const KEY_SPACE: i32 = 32;
pub const KEY_BACKSPACE: i32 = 127;
pub const KEY_RCTRL: i32 = 157;
pub const KEY_LEFTARROW: i32 = 172;
pub const KEY_UPARROW: i32 = 173;
pub const KEY_RIGHTARROW: i32 = 174;
pub const KEY_DOWNARROW: i32 = 175;
pub const KEY_RSHIFT: i32 = 182;
pub const KEY_RALT: i32 = 184;
pub const KEY_CAPSLOCK: i32 = 186;
pub const KEY_SCRLCK: i32 = 198;
pub const KEY_HOME: i32 = 199;
pub const KEY_PGUP: i32 = 201;
pub const KEYP_MINUS: i32 = 202;
pub const KEYP_5: i32 = 203;
pub const KEYP_PLUS: i32 = 204;
pub const KEY_END: i32 = 207;
pub const KEY_PGDN: i32 = 209;
pub const KEY_INSERT: i32 = 210;
pub const KEY_DELETE: i32 = 211;
pub const KEYP_MULTIPLY: i32 = 212;
pub const KEY_PAUSE: i32 = 255;

/// Number of persistable scancodes.
pub const SCANCODE_COUNT: usize = 128;

/// Raw scancode to key code, US-QWERTY layout. The function-key row
/// (scancodes 59 to 68) and the two codes past Scroll Lock's block are not
/// persistable and map to [`INVALID_KEY`].
pub static SCAN_TO_KEY: [i32; SCANCODE_COUNT] = [
    // 0..14: escape, digit row
    0,
    KEY_ESCAPE,
    '1' as i32,
    '2' as i32,
    '3' as i32,
    '4' as i32,
    '5' as i32,
    '6' as i32,
    '7' as i32,
    '8' as i32,
    '9' as i32,
    '0' as i32,
    '-' as i32,
    '=' as i32,
    KEY_BACKSPACE,
    // 15..29: tab, top letter row
    KEY_TAB,
    'q' as i32,
    'w' as i32,
    'e' as i32,
    'r' as i32,
    't' as i32,
    'y' as i32,
    'u' as i32,
    'i' as i32,
    'o' as i32,
    'p' as i32,
    '[' as i32,
    ']' as i32,
    KEY_ENTER,
    KEY_RCTRL,
    // 30..43: home letter row
    'a' as i32,
    's' as i32,
    'd' as i32,
    'f' as i32,
    'g' as i32,
    'h' as i32,
    'j' as i32,
    'k' as i32,
    'l' as i32,
    ';' as i32,
    '\'' as i32,
    '`' as i32,
    KEY_RSHIFT,
    '\\' as i32,
    // 44..58: bottom letter row, space block
    'z' as i32,
    'x' as i32,
    'c' as i32,
    'v' as i32,
    'b' as i32,
    'n' as i32,
    'm' as i32,
    ',' as i32,
    '.' as i32,
    '/' as i32,
    KEY_RSHIFT,
    KEYP_MULTIPLY,
    KEY_RALT,
    KEY_SPACE,
    KEY_CAPSLOCK,
    // 59..68: function-key row
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    INVALID_KEY,
    // 69..83: pause, navigation and keypad block
    KEY_PAUSE,
    KEY_SCRLCK,
    KEY_HOME,
    KEY_UPARROW,
    KEY_PGUP,
    KEYP_MINUS,
    KEY_LEFTARROW,
    KEYP_5,
    KEY_RIGHTARROW,
    KEYP_PLUS,
    KEY_END,
    KEY_DOWNARROW,
    KEY_PGDN,
    KEY_INSERT,
    KEY_DELETE,
    // 84..128: unassigned tail
    0,
    0,
    0,
    INVALID_KEY,
    INVALID_KEY,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
];

/// Translates a raw scancode to its key code.
///
/// Scancodes outside the table yield [`INVALID_KEY`].
pub fn translate(scancode: i32) -> i32 {
    if (0..SCANCODE_COUNT as i32).contains(&scancode) {
        SCAN_TO_KEY[scancode as usize]
    } else {
        INVALID_KEY
    }
}

/// Finds the first scancode that translates to `key`.
pub fn find_scancode(key: i32) -> Option<usize> {
    SCAN_TO_KEY.iter().position(|&k| k == key)
}

/// Whether a key code can be written as a quoted character (`'a'`).
///
/// Space is excluded even though it is printable: a bare space inside a
/// value field would split the line on reload, so it round-trips through
/// its alias instead.
pub fn is_printable(key: i32) -> bool {
    (0x21..=0x7e).contains(&key)
}
