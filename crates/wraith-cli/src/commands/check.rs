//! Check command implementation
//!
//! Loads the settings file, repairs every suspect value, and writes the
//! corrected file back, reporting what changed.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use wraith_config::{ControlTable, SettingsStore, StartupReport};

use super::json_output::{print_json, CheckOutput};

/// Run the check command
///
/// # Arguments
/// * `file` - Path to the settings file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the file was already clean (or freshly created), 1 if
/// anything had to be repaired or the corrected file could not be written
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    let mut store = SettingsStore::new(file, Box::new(ControlTable::new()));
    let report = store.load_or_default();
    if json_output {
        run_json(&report)
    } else {
        run_human(&report)
    }
}

fn outcome(report: &StartupReport) -> &'static str {
    if report.save_error.is_some() {
        "failed"
    } else if report.load.is_clean() && !report.sanitize.changed() {
        "clean"
    } else {
        "repaired"
    }
}

fn run_human(report: &StartupReport) -> Result<ExitCode> {
    println!("{} {}", "Checking:".cyan().bold(), report.path);
    println!("{}", report.notice());

    if !report.load.issues.is_empty() {
        println!();
        println!("{}", "Suspect lines:".bold());
        for issue in &report.load.issues {
            println!("  {} {}", "!!".yellow(), issue);
        }
    }

    if report.sanitize.changed() {
        println!();
        println!("{}", "Corrections:".bold());
        for note in &report.sanitize.notes {
            println!("  {} {}", "->".green(), note);
        }
    }

    println!();
    match outcome(report) {
        "failed" => {
            let error = report.save_error.as_deref().unwrap_or("unknown error");
            println!(
                "{} Could not write {}: {}",
                "FAILED".red().bold(),
                report.path,
                error
            );
            Ok(ExitCode::from(1))
        }
        "clean" => {
            println!("{} Settings file is clean.", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            let repaired = report.load.issues.len() + report.sanitize.notes.len();
            println!(
                "{} Repaired {} issue(s); corrected file saved.",
                "WARNING".yellow().bold(),
                repaired
            );
            Ok(ExitCode::from(1))
        }
    }
}

fn run_json(report: &StartupReport) -> Result<ExitCode> {
    let result = outcome(report);
    print_json(&CheckOutput { result, report })?;
    if result == "clean" {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
