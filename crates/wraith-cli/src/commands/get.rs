//! Get command implementation
//!
//! Prints one setting's formatted value after an in-memory sanitization
//! pass, suitable for shell capture.

use anyhow::{Context, Result};
use std::process::ExitCode;

use wraith_config::{sanitize, ConfigError, ControlTable, SettingsStore};

use super::json_output::{print_json, ErrorOutput, GetOutput};

/// Run the get command
///
/// # Arguments
/// * `file` - Path to the settings file
/// * `name` - Setting name to look up
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 for an unknown setting
pub fn run(file: &str, name: &str, json_output: bool) -> Result<ExitCode> {
    let mut store = SettingsStore::new(file, Box::new(ControlTable::new()));
    store
        .load()
        .with_context(|| format!("failed to read settings file: {file}"))?;
    sanitize(&mut store);

    match store.format_setting(name) {
        Some(value) => {
            if json_output {
                print_json(&GetOutput { name, value })?;
            } else {
                println!("{value}");
            }
            Ok(ExitCode::SUCCESS)
        }
        None if json_output => {
            print_json(&ErrorOutput::unknown_setting(name))?;
            Ok(ExitCode::from(1))
        }
        None => Err(ConfigError::UnknownSetting(name.to_string()).into()),
    }
}
