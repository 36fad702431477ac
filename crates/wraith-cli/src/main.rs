//! Wraith CLI - Settings file maintenance for the Wraith engine
//!
//! This binary provides commands for checking, repairing, inspecting, and
//! editing `wraith.cfg` settings files outside the engine.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use wraith_cli::commands;

/// Wraith - Settings File Maintenance Tool
#[derive(Parser)]
#[command(name = "wraithcfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the settings file, repair suspect values, and resave it
    Check {
        /// Path to the settings file
        #[arg(short, long, default_value = "wraith.cfg")]
        file: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print every setting with its effective value
    Dump {
        /// Path to the settings file
        #[arg(short, long, default_value = "wraith.cfg")]
        file: String,

        /// Only print settings whose name matches this regex
        #[arg(long)]
        filter: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print one setting's value
    Get {
        /// Setting name (e.g. r_gamma)
        name: String,

        /// Path to the settings file
        #[arg(short, long, default_value = "wraith.cfg")]
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Change one setting and save the file
    Set {
        /// Setting name (e.g. r_gamma)
        name: String,

        /// New value, in settings file syntax (e.g. 0.90, on, '0x388')
        value: String,

        /// Path to the settings file
        #[arg(short, long, default_value = "wraith.cfg")]
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Restore one setting, or the whole file, to defaults
    Reset {
        /// Setting name; omit to reset everything
        name: Option<String>,

        /// Path to the settings file
        #[arg(short, long, default_value = "wraith.cfg")]
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check the settings environment and music configuration
    Doctor {
        /// Path to the settings file
        #[arg(short, long, default_value = "wraith.cfg")]
        file: String,

        /// Also sniff this music file and report its container format
        #[arg(long)]
        music: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file, json } => commands::check::run(&file, json),
        Commands::Dump { file, filter, json } => {
            commands::dump::run(&file, filter.as_deref(), json)
        }
        Commands::Get { name, file, json } => commands::get::run(&file, &name, json),
        Commands::Set {
            name,
            value,
            file,
            json,
        } => commands::set::run(&file, &name, &value, json),
        Commands::Reset { name, file, json } => {
            commands::reset::run(&file, name.as_deref(), json)
        }
        Commands::Doctor { file, music, json } => {
            commands::doctor::run(&file, music.as_deref(), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
