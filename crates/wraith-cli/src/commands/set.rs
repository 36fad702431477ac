//! Set command implementation
//!
//! Parses a value through the same text path the loader uses, sanitizes
//! the result, and saves the file. The stored value is echoed back, so
//! clamping and alias resolution are visible immediately.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use wraith_config::{find, sanitize, ControlTable, SettingsStore};

use super::json_output::{print_json, ErrorOutput, SetOutput};

/// Run the set command
///
/// # Arguments
/// * `file` - Path to the settings file
/// * `name` - Setting name to change
/// * `value` - New value, in settings file syntax
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 for an unknown setting
pub fn run(file: &str, name: &str, value: &str, json_output: bool) -> Result<ExitCode> {
    let descriptor = match find(name) {
        Some(descriptor) => descriptor,
        None if json_output => {
            print_json(&ErrorOutput::unknown_setting(name))?;
            return Ok(ExitCode::from(1));
        }
        None => return Err(anyhow!("unknown setting `{name}`")),
    };

    let mut store = SettingsStore::new(file, Box::new(ControlTable::new()));
    store
        .load()
        .with_context(|| format!("failed to read settings file: {file}"))?;
    store.set_from_text(descriptor.name, value)?;
    let corrections = sanitize(&mut store);

    let stored = store
        .format_setting(descriptor.name)
        .ok_or_else(|| anyhow!("unknown setting `{name}`"))?;
    store
        .save()
        .with_context(|| format!("failed to write settings file: {file}"))?;

    if json_output {
        print_json(&SetOutput {
            name: descriptor.name,
            requested: value,
            value: stored,
            corrections: &corrections.notes,
            saved: true,
        })?;
    } else {
        println!("{} {} {}", "Set:".cyan().bold(), descriptor.name, stored);
        for note in &corrections.notes {
            println!("  {} {}", "->".yellow(), note);
        }
        println!("Saved {file}.");
    }
    Ok(ExitCode::SUCCESS)
}
