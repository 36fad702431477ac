//! Wraith settings registry, text persistence, and sanitization.
//!
//! # Overview
//!
//! This crate owns the engine's settings file: a line-oriented text format
//! of `name value` pairs followed by `bind control action` lines. Values
//! round-trip through symbolic aliases (`on`, `ctrl`, `unlimited`),
//! scancode translation for keyboard bindings, and a trailing-zero float
//! renderer. Loading is tolerant end to end; a sanitize pass clamps and
//! resets whatever the file held before the store is written back.
//!
//! The usual flow is three calls:
//!
//! ```no_run
//! use wraith_config::{ControlTable, SettingsStore};
//!
//! let mut store = SettingsStore::new("wraith.cfg", Box::new(ControlTable::new()));
//! let report = store.load_or_default();
//! println!("{}", report.notice());
//! ```
//!
//! # Modules
//!
//! - [`registry`]: setting descriptors, kinds, and defaults
//! - [`store`]: the settings store and its load/save engine
//! - [`sanitize`]: post-load corrections and derived values
//! - [`format`] / [`parse`]: value text in both directions
//! - [`alias`]: symbolic value names per namespace
//! - [`keys`]: scancode translation
//! - [`bindings`]: the input-layer seam for `bind` lines
//! - [`error`]: errors, issue codes, and reports

pub mod alias;
pub mod bindings;
pub mod error;
pub mod format;
pub mod keys;
pub mod parse;
pub mod registry;
pub mod sanitize;
pub mod store;
pub mod value;

pub use alias::{alias_text, alias_value, AliasSet};
pub use bindings::{ActionBinding, BindingHost, ControlDevice, ControlTable};
pub use error::{
    ConfigError, ConfigResult, IssueCode, LoadIssue, LoadOutcome, LoadReport, NoteCode,
    SanitizeNote, SanitizeReport, StartupReport,
};
pub use format::{format_value, strip_trailing_zero};
pub use keys::INVALID_KEY;
pub use parse::{parse_float, parse_int};
pub use registry::{find, Descriptor, SettingKind, REGISTRY};
pub use sanitize::{sanitize, DerivedSettings, GAMMA_LEVELS};
pub use store::SettingsStore;
pub use value::{KeyBinding, Value};
