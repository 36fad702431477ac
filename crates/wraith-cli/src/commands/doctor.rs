//! Doctor command implementation
//!
//! Checks the settings environment: file readability, directory
//! permissions, the configured soundfont, and optionally a music file.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use wraith_config::{ControlTable, LoadOutcome, SettingsStore};
use wraith_music::{probe, MusicFormat, SoundfontStatus};

use super::json_output::{print_json, DoctorCheck, DoctorOutput};

/// Run the doctor command
///
/// # Arguments
/// * `file` - Path to the settings file
/// * `music` - Optional music file to sniff
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if no check errored, 1 otherwise. Warnings (missing
/// soundfont, unrecognized music data) do not fail the run.
pub fn run(file: &str, music: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let checks = gather(file, music);
    let failed = checks.iter().any(|check| check.status == "error");

    if json_output {
        print_json(&DoctorOutput {
            result: if failed { "failed" } else { "ok" },
            checks,
        })?;
        return Ok(if failed {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        });
    }

    println!("{}", "Wraith Doctor".cyan().bold());
    println!("{}", "=============".cyan());
    println!();
    println!(
        "  {} wraithcfg v{}",
        "->".green(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    for check in &checks {
        let marker = match check.status {
            "ok" => "ok".green(),
            "warning" => "!!".yellow(),
            _ => "!!".red(),
        };
        println!("  {} {}: {}", marker, check.name, check.detail);
    }

    println!();
    if failed {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(1))
    } else {
        println!("{} All checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    }
}

fn gather(file: &str, music: Option<&str>) -> Vec<DoctorCheck> {
    let mut checks = Vec::new();
    let mut store = SettingsStore::new(file, Box::new(ControlTable::new()));

    checks.push(match store.load() {
        Ok(report) if report.outcome == LoadOutcome::NotFound => DoctorCheck {
            name: "settings file",
            status: "ok",
            detail: format!("{file} not found (created on first run)"),
        },
        Ok(report) if report.issues.is_empty() => DoctorCheck {
            name: "settings file",
            status: "ok",
            detail: format!("{} settings, {} bind lines", report.applied, report.bind_lines),
        },
        Ok(report) => DoctorCheck {
            name: "settings file",
            status: "warning",
            detail: format!("{} suspect line(s), run `wraithcfg check`", report.issues.len()),
        },
        Err(error) => DoctorCheck {
            name: "settings file",
            status: "error",
            detail: error.to_string(),
        },
    });

    checks.push(directory_check(file));

    let soundfont = store
        .string("s_soundfont")
        .unwrap_or_else(|| "wraith.sf2".to_string());
    let status = SoundfontStatus::probe(Path::new(&soundfont));
    checks.push(DoctorCheck {
        name: "soundfont",
        status: if status.is_usable() { "ok" } else { "warning" },
        detail: if status.is_usable() {
            format!("{soundfont} {status}")
        } else {
            format!("{soundfont} {status}; MIDI music will be silent")
        },
    });

    if let Some(music) = music {
        checks.push(match fs::read(music) {
            Ok(data) => match probe(&data) {
                MusicFormat::None => DoctorCheck {
                    name: "music file",
                    status: "warning",
                    detail: format!("{music}: unrecognized container"),
                },
                format => DoctorCheck {
                    name: "music file",
                    status: "ok",
                    detail: format!("{music}: {format}"),
                },
            },
            Err(error) => DoctorCheck {
                name: "music file",
                status: "error",
                detail: format!("{music}: {error}"),
            },
        });
    }

    checks
}

/// Checks that the settings file's directory accepts writes.
fn directory_check(file: &str) -> DoctorCheck {
    let dir = match Path::new(file).parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    let probe_path = dir.join(".wraith_write_test");
    match fs::write(&probe_path, "test") {
        Ok(()) => {
            let _ = fs::remove_file(&probe_path);
            DoctorCheck {
                name: "settings directory",
                status: "ok",
                detail: format!("{} is writable", dir.display()),
            }
        }
        Err(error) => DoctorCheck {
            name: "settings directory",
            status: "error",
            detail: format!("cannot write to {}: {}", dir.display(), error),
        },
    }
}
