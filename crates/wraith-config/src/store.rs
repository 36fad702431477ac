//! The settings store and its text persistence.
//!
//! One store owns one settings file. Loading is tolerant: a missing file
//! is a normal outcome, unknown names and malformed lines are reported
//! and skipped, and values that fail to parse come out as zero.
//! Saving always writes the full registry in declaration order, then a
//! blank line, then the binding host's `bind` lines.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::bindings::{ActionBinding, BindingHost, ControlDevice};
use crate::error::{
    ConfigError, ConfigResult, IssueCode, LoadIssue, LoadReport, StartupReport,
};
use crate::format::{bind_control_token, format_value};
use crate::parse::{parse_float, parse_int};
use crate::registry::{self, Descriptor, SettingKind, REGISTRY};
use crate::sanitize::{self, DerivedSettings};
use crate::value::{KeyBinding, Value};

/// Strips one pair of matching surrounding quotes.
fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Strips trailing non-printable characters, the line-ending artifacts
/// DOS text files leave on a value.
fn strip_trailing_nonprintable(text: &str) -> &str {
    text.trim_end_matches(|c: char| !(' '..='~').contains(&c))
}

/// The settings registry bound to one file and one binding host.
pub struct SettingsStore {
    path: PathBuf,
    slots: Vec<Value>,
    derived: DerivedSettings,
    host: Box<dyn BindingHost>,
    widescreen_requested: bool,
}

impl SettingsStore {
    /// A store holding every registry default. Derived values are valid
    /// from construction.
    pub fn new(path: impl Into<PathBuf>, host: Box<dyn BindingHost>) -> Self {
        let mut store = SettingsStore {
            path: path.into(),
            slots: REGISTRY.iter().map(|d| d.default_value()).collect(),
            derived: DerivedSettings::default(),
            host,
            widescreen_requested: false,
        };
        sanitize::sanitize(&mut store);
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Descriptors and current values in registry order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static Descriptor, &Value)> + '_ {
        REGISTRY.iter().zip(self.slots.iter())
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        registry::find_index(name).map(|i| &self.slots[i])
    }

    pub fn int(&self, name: &str) -> Option<i32> {
        self.value(name).and_then(Value::as_int)
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        self.value(name).and_then(Value::as_float)
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.value(name).and_then(|v| v.as_str().map(str::to_string))
    }

    pub fn key(&self, name: &str) -> Option<KeyBinding> {
        self.value(name).and_then(Value::as_key)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Value> {
        registry::find_index(name).map(|i| &mut self.slots[i])
    }

    pub fn set_int(&mut self, name: &str, value: i32) -> bool {
        match self.slot_mut(name) {
            Some(Value::Int(slot)) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    pub fn set_float(&mut self, name: &str, value: f32) -> bool {
        match self.slot_mut(name) {
            Some(Value::Float(slot)) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    pub fn set_string(&mut self, name: &str, value: &str) -> bool {
        match self.slot_mut(name) {
            Some(Value::Str(slot)) => {
                *slot = value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Rebinds a keyboard setting to a new key code, as the in-game menu
    /// does. The original scancode bookkeeping is left alone so the save
    /// path can tell the key changed.
    pub fn set_key(&mut self, name: &str, key: i32) -> bool {
        match self.slot_mut(name) {
            Some(Value::Key(binding)) => {
                binding.key = key;
                true
            }
            _ => false,
        }
    }

    /// Applies file-syntax text to one setting.
    pub fn set_from_text(&mut self, name: &str, text: &str) -> ConfigResult<()> {
        match registry::find_index(name) {
            Some(index) => {
                self.apply_text(index, text.trim());
                Ok(())
            }
            None => Err(ConfigError::UnknownSetting(name.to_string())),
        }
    }

    /// The file-syntax form of one setting's current value.
    pub fn format_setting(&self, name: &str) -> Option<String> {
        registry::find_index(name).map(|i| format_value(&REGISTRY[i], &self.slots[i]))
    }

    /// Puts one setting back to its registry default.
    pub fn reset(&mut self, name: &str) -> bool {
        match registry::find_index(name) {
            Some(index) => {
                self.slots[index] = REGISTRY[index].default_value();
                true
            }
            None => false,
        }
    }

    pub fn derived(&self) -> &DerivedSettings {
        &self.derived
    }

    pub(crate) fn set_derived(&mut self, derived: DerivedSettings) {
        self.derived = derived;
    }

    /// Whether the sanitizer deferred a widescreen switch to the engine.
    /// The saved file keeps `vid_widescreen on` while this is set.
    pub fn widescreen_requested(&self) -> bool {
        self.widescreen_requested
    }

    pub(crate) fn request_widescreen(&mut self) {
        self.widescreen_requested = true;
    }

    /// Forwards one control binding to the host, as a `bind` line does.
    pub fn bind(&mut self, control: &str, action: &str) {
        self.host.bind(control, action);
    }

    /// The host's current bindings.
    pub fn bindings(&self) -> Vec<ActionBinding> {
        self.host.bindings()
    }

    /// Reads the settings file. A missing file is a normal outcome;
    /// anything unreadable inside an existing file becomes an issue in the
    /// report rather than an error.
    pub fn load(&mut self) -> ConfigResult<LoadReport> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadReport::not_found()),
            Err(e) => return Err(e.into()),
        };

        let mut report = LoadReport::loaded();
        for (number, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            let line_number = number + 1;
            let text = String::from_utf8_lossy(raw);
            if matches!(text, Cow::Owned(_)) {
                report.add_issue(LoadIssue::new(
                    line_number,
                    IssueCode::InvalidEncoding,
                    text.trim_end().to_string(),
                ));
            }
            self.apply_line(text.trim(), line_number, &mut report);
        }
        Ok(report)
    }

    fn apply_line(&mut self, line: &str, number: usize, report: &mut LoadReport) {
        if line.is_empty() {
            return;
        }
        let (first, rest) = match line.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim_start()),
            None => (line, ""),
        };

        if first == "bind" {
            let (control, action) = match rest.split_once(char::is_whitespace) {
                Some((control, action)) => (control, action.trim_start()),
                None => (rest, ""),
            };
            if !control.is_empty() && !action.is_empty() {
                self.host.bind(strip_quotes(control), strip_quotes(action));
                report.bind_lines += 1;
            } else {
                report.add_issue(LoadIssue::new(
                    number,
                    IssueCode::MalformedLine,
                    line.to_string(),
                ));
            }
            return;
        }

        match registry::find_index(first) {
            Some(index) => {
                let value = strip_trailing_nonprintable(rest);
                if value.is_empty() {
                    report.add_issue(LoadIssue::new(
                        number,
                        IssueCode::MalformedLine,
                        line.to_string(),
                    ));
                } else {
                    self.apply_text(index, value);
                    report.applied += 1;
                }
            }
            None => {
                report.add_issue(LoadIssue::new(
                    number,
                    IssueCode::UnknownSetting,
                    first.to_string(),
                ));
            }
        }
    }

    fn apply_text(&mut self, index: usize, text: &str) {
        let descriptor = &REGISTRY[index];
        let slot = &mut self.slots[index];
        match descriptor.kind {
            SettingKind::String => *slot = Value::Str(strip_quotes(text).to_string()),
            SettingKind::Int | SettingKind::IntHex => {
                *slot = Value::Int(parse_int(text, descriptor.set));
            }
            SettingKind::IntPercent => {
                let text = text.strip_suffix('%').unwrap_or(text);
                *slot = Value::Int(parse_int(text, descriptor.set));
            }
            SettingKind::Float => *slot = Value::Float(parse_float(text, descriptor.set)),
            SettingKind::FloatPercent => {
                let text = text.strip_suffix('%').unwrap_or(text);
                *slot = Value::Float(parse_float(text, descriptor.set));
            }
            SettingKind::Key => {
                let scancode = parse_int(text, descriptor.set);
                *slot = Value::Key(KeyBinding::from_scancode(scancode));
            }
        }
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (descriptor, slot) in REGISTRY.iter().zip(&self.slots) {
            let text = if descriptor.name == "vid_widescreen" && self.widescreen_requested {
                format_value(descriptor, &Value::Int(1))
            } else {
                format_value(descriptor, slot)
            };
            writeln!(writer, "{} {}", descriptor.name, text)?;
        }
        writeln!(writer)?;

        for binding in self.host.bindings() {
            for device in [
                ControlDevice::Keyboard,
                ControlDevice::Mouse,
                ControlDevice::Gamepad,
            ] {
                if let Some(value) = binding.get(device) {
                    if let Some(token) = self.host.control_token(device, value) {
                        writeln!(
                            writer,
                            "bind {} {}",
                            bind_control_token(&token),
                            binding.action
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Writes the settings file, creating or truncating it.
    pub fn save(&self) -> ConfigResult<()> {
        let file = fs::File::create(&self.path)?;
        let mut writer = io::BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// The startup flow: load, sanitize, and save the sanitized values
    /// back. Never fails; an unreadable file counts as missing and a
    /// failed save is recorded in the report.
    pub fn load_or_default(&mut self) -> StartupReport {
        let load = self.load().unwrap_or_else(|_| LoadReport::not_found());
        let sanitize = sanitize::sanitize(self);
        let (saved, save_error) = match self.save() {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        };
        StartupReport {
            path: self.path.display().to_string(),
            load,
            sanitize,
            saved,
            save_error,
        }
    }
}
