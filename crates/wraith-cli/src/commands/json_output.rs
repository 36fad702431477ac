//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag. The
//! envelopes embed the report types from `wraith-config`, so issue and
//! correction codes arrive unchanged.

use serde::Serialize;
use wraith_config::{IssueCode, SanitizeNote, StartupReport};

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Envelope for `check --json`.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    /// "clean", "repaired", or "failed"
    pub result: &'static str,
    #[serde(flatten)]
    pub report: &'a StartupReport,
}

/// One formatted setting in `dump --json`.
#[derive(Serialize)]
pub struct DumpEntry {
    pub name: &'static str,
    pub kind: &'static str,
    pub value: String,
}

/// Envelope for `dump --json`.
#[derive(Serialize)]
pub struct DumpOutput<'a> {
    pub path: &'a str,
    pub settings: Vec<DumpEntry>,
}

/// Envelope for `get --json`.
#[derive(Serialize)]
pub struct GetOutput<'a> {
    pub name: &'a str,
    pub value: String,
}

/// Envelope for `set --json`. `value` is the stored result after parsing
/// and sanitization, which can differ from `requested`.
#[derive(Serialize)]
pub struct SetOutput<'a> {
    pub name: &'a str,
    pub requested: &'a str,
    pub value: String,
    pub corrections: &'a [SanitizeNote],
    pub saved: bool,
}

/// Envelope for `reset --json`.
#[derive(Serialize)]
pub struct ResetOutput {
    pub reset: Vec<&'static str>,
    pub saved: bool,
}

/// One diagnostic in `doctor --json`.
#[derive(Serialize)]
pub struct DoctorCheck {
    pub name: &'static str,
    /// "ok", "warning", or "error"
    pub status: &'static str,
    pub detail: String,
}

/// Envelope for `doctor --json`.
#[derive(Serialize)]
pub struct DoctorOutput {
    /// "ok" or "failed"
    pub result: &'static str,
    pub checks: Vec<DoctorCheck>,
}

/// A structured error in JSON output.
#[derive(Serialize)]
pub struct JsonIssue {
    pub code: String,
    pub message: String,
}

/// Error envelope shared by the single-setting commands.
#[derive(Serialize)]
pub struct ErrorOutput {
    pub result: &'static str,
    pub errors: Vec<JsonIssue>,
}

impl ErrorOutput {
    pub fn unknown_setting(name: &str) -> Self {
        ErrorOutput {
            result: "error",
            errors: vec![JsonIssue {
                code: IssueCode::UnknownSetting.code().to_string(),
                message: format!("unknown setting `{name}`"),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn unknown_setting_envelope_carries_the_issue_code() {
        let out = ErrorOutput::unknown_setting("r_ghosts");
        let json: Value = serde_json::to_value(&out).unwrap();
        assert_eq!(json["result"], "error");
        assert_eq!(json["errors"][0]["code"], "C001");
        assert_eq!(json["errors"][0]["message"], "unknown setting `r_ghosts`");
    }

    #[test]
    fn dump_output_lists_settings_in_order() {
        let out = DumpOutput {
            path: "wraith.cfg",
            settings: vec![
                DumpEntry {
                    name: "r_gamma",
                    kind: "float",
                    value: "0.75".to_string(),
                },
                DumpEntry {
                    name: "r_hud",
                    kind: "int",
                    value: "on".to_string(),
                },
            ],
        };
        let json: Value = serde_json::to_value(&out).unwrap();
        assert_eq!(json["settings"][0]["name"], "r_gamma");
        assert_eq!(json["settings"][1]["value"], "on");
    }
}
