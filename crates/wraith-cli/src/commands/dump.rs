//! Dump command implementation
//!
//! Prints every setting with its formatted value, after an in-memory
//! sanitization pass. The file on disk is never rewritten.

use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;
use std::process::ExitCode;

use wraith_config::{format_value, sanitize, ControlTable, SettingsStore};

use super::json_output::{print_json, DumpEntry, DumpOutput};

/// Run the dump command
///
/// # Arguments
/// * `file` - Path to the settings file
/// * `filter` - Optional regex applied to setting names
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: always 0 unless the file or filter is unusable
pub fn run(file: &str, filter: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let filter = match filter {
        Some(pattern) => {
            Some(Regex::new(pattern).with_context(|| format!("invalid filter `{pattern}`"))?)
        }
        None => None,
    };

    let mut store = SettingsStore::new(file, Box::new(ControlTable::new()));
    store
        .load()
        .with_context(|| format!("failed to read settings file: {file}"))?;
    sanitize(&mut store);

    let entries: Vec<DumpEntry> = store
        .entries()
        .filter(|(descriptor, _)| {
            filter
                .as_ref()
                .map_or(true, |regex| regex.is_match(descriptor.name))
        })
        .map(|(descriptor, value)| DumpEntry {
            name: descriptor.name,
            kind: descriptor.kind.as_str(),
            value: format_value(descriptor, value),
        })
        .collect();

    if json_output {
        print_json(&DumpOutput {
            path: file,
            settings: entries,
        })?;
    } else {
        for entry in &entries {
            println!("{} {}", entry.name, entry.value);
        }
        if entries.is_empty() {
            eprintln!("{}", "no settings matched the filter".dimmed());
        }
    }
    Ok(ExitCode::SUCCESS)
}
