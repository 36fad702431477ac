//! Error and report types for settings persistence.
//!
//! Nothing in the load/sanitize flow aborts engine startup. Hard failures
//! (I/O, caller bugs) use [`ConfigError`]; everything recoverable lands in
//! a report with a stable issue code so callers can show what happened.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Hard failure from the settings store.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Stable codes for lines the loader could not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    /// First token names no registered setting.
    UnknownSetting,
    /// Line matches neither the setting nor the bind grammar.
    MalformedLine,
    /// Line contained bytes that are not valid UTF-8; it was processed
    /// with replacement characters.
    InvalidEncoding,
}

impl IssueCode {
    pub fn code(&self) -> &'static str {
        match self {
            IssueCode::UnknownSetting => "C001",
            IssueCode::MalformedLine => "C002",
            IssueCode::InvalidEncoding => "C003",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for IssueCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// One line the loader skipped or only partially applied.
#[derive(Debug, Clone, Serialize)]
pub struct LoadIssue {
    /// 1-based line number in the settings file.
    pub line: usize,
    pub code: IssueCode,
    pub text: String,
}

impl LoadIssue {
    pub fn new(line: usize, code: IssueCode, text: impl Into<String>) -> Self {
        LoadIssue {
            line,
            code,
            text: text.into(),
        }
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] line {}: {}", self.code, self.line, self.text)
    }
}

/// Whether the settings file existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded,
    NotFound,
}

/// Result of one load pass.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    /// Settings whose stored value was replaced from the file.
    pub applied: usize,
    /// Recognized `bind` lines dispatched to the binding host.
    pub bind_lines: usize,
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    pub fn not_found() -> Self {
        LoadReport {
            outcome: LoadOutcome::NotFound,
            applied: 0,
            bind_lines: 0,
            issues: Vec::new(),
        }
    }

    pub fn loaded() -> Self {
        LoadReport {
            outcome: LoadOutcome::Loaded,
            applied: 0,
            bind_lines: 0,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: LoadIssue) {
        self.issues.push(issue);
    }

    /// File existed and every line was applied.
    pub fn is_clean(&self) -> bool {
        self.outcome == LoadOutcome::Loaded && self.issues.is_empty()
    }
}

/// Stable codes for sanitizer corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCode {
    /// Value outside {0, 1} reset to its default.
    BoolReset,
    /// Value clamped into its documented range.
    Clamp,
    /// Value outside an enumerated vocabulary reset to its default.
    EnumReset,
    /// A derived value fell back to its default because the stored value
    /// matched no table entry.
    Derived,
    /// Screen, window, or pixel geometry adjusted.
    Geometry,
    /// Value forced by another setting.
    CrossField,
}

impl NoteCode {
    pub fn code(&self) -> &'static str {
        match self {
            NoteCode::BoolReset => "S001",
            NoteCode::Clamp => "S002",
            NoteCode::EnumReset => "S003",
            NoteCode::Derived => "S004",
            NoteCode::Geometry => "S005",
            NoteCode::CrossField => "S006",
        }
    }
}

impl fmt::Display for NoteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for NoteCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// One correction applied by the sanitizer.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizeNote {
    pub name: &'static str,
    pub code: NoteCode,
    pub action: String,
}

impl fmt::Display for SanitizeNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.name, self.action)
    }
}

/// Result of one sanitize pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SanitizeReport {
    pub notes: Vec<SanitizeNote>,
}

impl SanitizeReport {
    pub fn note(&mut self, name: &'static str, code: NoteCode, action: impl Into<String>) {
        self.notes.push(SanitizeNote {
            name,
            code,
            action: action.into(),
        });
    }

    /// Whether any stored value was corrected.
    pub fn changed(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// Combined result of the startup flow: load, sanitize, best-effort resave.
#[derive(Debug, Clone, Serialize)]
pub struct StartupReport {
    /// Display form of the settings file path.
    pub path: String,
    pub load: LoadReport,
    pub sanitize: SanitizeReport,
    /// Whether the post-sanitize save reached the disk.
    pub saved: bool,
    pub save_error: Option<String>,
}

impl StartupReport {
    /// The classic console notice for this startup.
    pub fn notice(&self) -> String {
        match self.load.outcome {
            LoadOutcome::Loaded => {
                format!("Loaded {} settings from {}.", self.load.applied, self.path)
            }
            LoadOutcome::NotFound => format!(
                "{} not found. Using defaults for all settings and creating it.",
                self.path
            ),
        }
    }
}
