//! Action bindings and the input-layer seam.
//!
//! `bind` lines in the settings file belong to the input layer, not the
//! settings registry. The store forwards them through [`BindingHost`] on
//! load and asks the host for its current bindings on save. [`ControlTable`]
//! is the stock host used by the engine and the test suites.

use crate::alias::{alias_text, alias_value, AliasSet};
use crate::keys;

/// Physical device a control token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlDevice {
    Keyboard,
    Mouse,
    Gamepad,
}

/// One logical action and its per-device bindings. Keyboard bindings hold
/// translated key codes; mouse and gamepad bindings hold raw button values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    pub action: String,
    pub keyboard: Option<i32>,
    pub mouse: Option<i32>,
    pub gamepad: Option<i32>,
}

impl ActionBinding {
    fn unbound(action: &str) -> Self {
        ActionBinding {
            action: action.to_string(),
            keyboard: None,
            mouse: None,
            gamepad: None,
        }
    }

    pub fn get(&self, device: ControlDevice) -> Option<i32> {
        match device {
            ControlDevice::Keyboard => self.keyboard,
            ControlDevice::Mouse => self.mouse,
            ControlDevice::Gamepad => self.gamepad,
        }
    }

    fn set(&mut self, device: ControlDevice, value: Option<i32>) {
        match device {
            ControlDevice::Keyboard => self.keyboard = value,
            ControlDevice::Mouse => self.mouse = value,
            ControlDevice::Gamepad => self.gamepad = value,
        }
    }
}

/// The input-layer collaborator the persistence engine talks to.
pub trait BindingHost {
    /// Applies one recognized `bind` line. Unknown controls or actions
    /// are the host's business; the loader never inspects them.
    fn bind(&mut self, control: &str, action: &str);

    /// Control token for a bound value, or `None` when the value has no
    /// written form (the save path drops the line).
    fn control_token(&self, device: ControlDevice, value: i32) -> Option<String>;

    /// Current bindings, in save order.
    fn bindings(&self) -> Vec<ActionBinding>;
}

/// Logical actions in save order.
const ACTIONS: &[&str] = &[
    "+back",
    "+fire",
    "+forward",
    "+left",
    "+map",
    "+right",
    "+run",
    "+strafeleft",
    "+straferight",
    "+use",
];

/// Mouse control tokens, indexed by button value.
const MOUSE_TOKENS: &[&str] = &[
    "mouse1", "mouse2", "mouse3", "mouse4", "mouse5", "mouse6", "mouse7", "mouse8", "wheelup",
    "wheeldown",
];

/// The stock binding table.
#[derive(Debug, Clone)]
pub struct ControlTable {
    bindings: Vec<ActionBinding>,
}

impl ControlTable {
    /// Table with every action unbound.
    pub fn empty() -> Self {
        ControlTable {
            bindings: ACTIONS.iter().map(|a| ActionBinding::unbound(a)).collect(),
        }
    }

    /// Table with the engine's default bindings.
    pub fn new() -> Self {
        let mut table = ControlTable::empty();
        table.bind("w", "+forward");
        table.bind("s", "+back");
        table.bind("a", "+strafeleft");
        table.bind("d", "+straferight");
        table.bind("e", "+use");
        table.bind("shift", "+run");
        table.bind("tab", "+map");
        table.bind("mouse1", "+fire");
        table.bind("righttrigger", "+fire");
        table
    }

    fn resolve(control: &str) -> Option<(ControlDevice, i32)> {
        if let Some(scancode) = alias_value(control, AliasSet::Keyboard) {
            let key = keys::translate(scancode);
            return Some((ControlDevice::Keyboard, key));
        }
        if let Some(value) = MOUSE_TOKENS.iter().position(|t| t.eq_ignore_ascii_case(control)) {
            return Some((ControlDevice::Mouse, value as i32));
        }
        if let Some(value) = alias_value(control, AliasSet::Gamepad) {
            if value > 0 {
                return Some((ControlDevice::Gamepad, value));
            }
            return None;
        }
        let mut chars = control.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_graphic() {
                let key = if c == '+' { '=' } else { c.to_ascii_lowercase() };
                return Some((ControlDevice::Keyboard, key as i32));
            }
        }
        None
    }
}

impl Default for ControlTable {
    fn default() -> Self {
        ControlTable::new()
    }
}

impl BindingHost for ControlTable {
    fn bind(&mut self, control: &str, action: &str) {
        let Some((device, value)) = ControlTable::resolve(control) else {
            return;
        };
        if let Some(row) = self.bindings.iter_mut().find(|b| b.action == action) {
            // A zero keyboard value is the unbind form ("none", "-").
            // Mouse button zero is a real binding.
            let value = match device {
                ControlDevice::Keyboard => (value != 0).then_some(value),
                _ => Some(value),
            };
            row.set(device, value);
        }
    }

    fn control_token(&self, device: ControlDevice, value: i32) -> Option<String> {
        match device {
            ControlDevice::Keyboard => {
                let scancode = keys::find_scancode(value)?;
                if let Some(text) = alias_text(scancode as i32, AliasSet::Keyboard) {
                    if text != "-" && text != "none" {
                        return Some(text.to_string());
                    }
                }
                if keys::is_printable(value) {
                    Some(((value as u8) as char).to_string())
                } else {
                    None
                }
            }
            ControlDevice::Mouse => {
                usize::try_from(value).ok().and_then(|v| MOUSE_TOKENS.get(v)).map(|t| t.to_string())
            }
            ControlDevice::Gamepad => {
                if value > 0 {
                    alias_text(value, AliasSet::Gamepad).map(str::to_string)
                } else {
                    None
                }
            }
        }
    }

    fn bindings(&self) -> Vec<ActionBinding> {
        self.bindings.clone()
    }
}
