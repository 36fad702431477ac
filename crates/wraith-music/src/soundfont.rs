//! Soundfont plumbing for software MIDI synthesis.
//!
//! The synthesizer reads its patch set from a configuration file rather
//! than taking a soundfont path directly, so a throwaway configuration
//! pointing at the configured `.sf2` file is written next to the engine.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::MusicResult;

/// A synthesizer configuration file naming one soundfont. The file lives
/// as long as this value does.
pub struct SoundfontConfig {
    file: NamedTempFile,
    soundfont: PathBuf,
}

impl SoundfontConfig {
    /// Writes a configuration file for `soundfont`. The host points the
    /// synthesizer at [`SoundfontConfig::path`] before opening the mixer.
    pub fn create(soundfont: &Path) -> MusicResult<SoundfontConfig> {
        let dir = match soundfont.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut file = NamedTempFile::new()?;
        writeln!(file, "dir {}", dir.display())?;
        writeln!(file, "source {}", soundfont.display())?;
        file.flush()?;
        Ok(SoundfontConfig {
            file,
            soundfont: soundfont.to_path_buf(),
        })
    }

    /// Path of the generated configuration file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Path of the soundfont the configuration names.
    pub fn soundfont(&self) -> &Path {
        &self.soundfont
    }
}

/// What a soundfont path points at on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundfontStatus {
    /// A regular file with content.
    Found { bytes: u64 },
    /// A regular file of zero length, unusable for synthesis.
    Empty,
    /// No file at the path.
    Missing,
}

impl SoundfontStatus {
    /// Checks what `path` points at without opening it.
    pub fn probe(path: &Path) -> SoundfontStatus {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => {
                SoundfontStatus::Found { bytes: meta.len() }
            }
            Ok(meta) if meta.is_file() => SoundfontStatus::Empty,
            _ => SoundfontStatus::Missing,
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, SoundfontStatus::Found { .. })
    }
}

impl fmt::Display for SoundfontStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundfontStatus::Found { bytes } => write!(f, "found ({bytes} bytes)"),
            SoundfontStatus::Empty => write!(f, "empty file"),
            SoundfontStatus::Missing => write!(f, "missing"),
        }
    }
}
