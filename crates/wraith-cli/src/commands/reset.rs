//! Reset command implementation
//!
//! Restores one setting, or the whole file, to shipped defaults.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use wraith_config::{find, sanitize, ControlTable, SettingsStore, REGISTRY};

use super::json_output::{print_json, ErrorOutput, ResetOutput};

/// Run the reset command
///
/// # Arguments
/// * `file` - Path to the settings file
/// * `name` - Setting to reset; `None` rewrites the whole file with defaults
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 for an unknown setting
pub fn run(file: &str, name: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let mut store = SettingsStore::new(file, Box::new(ControlTable::new()));

    let reset: Vec<&'static str> = match name {
        Some(name) => {
            let descriptor = match find(name) {
                Some(descriptor) => descriptor,
                None if json_output => {
                    print_json(&ErrorOutput::unknown_setting(name))?;
                    return Ok(ExitCode::from(1));
                }
                None => return Err(anyhow!("unknown setting `{name}`")),
            };
            store
                .load()
                .with_context(|| format!("failed to read settings file: {file}"))?;
            store.reset(descriptor.name);
            sanitize(&mut store);
            vec![descriptor.name]
        }
        // A full reset starts from defaults, so the file is not read at all.
        None => REGISTRY.iter().map(|d| d.name).collect(),
    };

    store
        .save()
        .with_context(|| format!("failed to write settings file: {file}"))?;

    if json_output {
        print_json(&ResetOutput { reset, saved: true })?;
    } else if let [name] = reset.as_slice() {
        let value = store.format_setting(name).unwrap_or_default();
        println!("{} {} {}", "Reset:".cyan().bold(), name, value);
        println!("Saved {file}.");
    } else {
        println!(
            "{} {} settings restored to defaults.",
            "Reset:".cyan().bold(),
            reset.len()
        );
        println!("Saved {file}.");
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reset_one_setting_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wraith.cfg");
        fs::write(&path, "r_gamma 1.50\nm_sensitivity 40\n").unwrap();

        run(path.to_str().unwrap(), Some("r_gamma"), false).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("r_gamma 0.75\n"));
        assert!(body.contains("m_sensitivity 40\n"));
    }

    #[test]
    fn reset_all_ignores_the_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wraith.cfg");
        fs::write(&path, "not even close to a settings file").unwrap();

        run(path.to_str().unwrap(), None, true).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("am_external off\n"));
        assert!(body.contains("bind mouse1 +fire\n"));
    }

    #[test]
    fn reset_rejects_an_unknown_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wraith.cfg");
        let err = run(path.to_str().unwrap(), Some("r_ghosts"), false)
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown setting"));
    }
}
