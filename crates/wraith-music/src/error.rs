//! Error types for the music driver.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MusicError {
    #[error("audio device is not open")]
    NotInitialized,

    #[error("no music is registered")]
    NothingRegistered,

    #[error("music data is not in any playable format")]
    UnrecognizedFormat,

    #[error("music conversion failed: {0}")]
    Conversion(String),

    #[error("mixer error: {0}")]
    Mixer(String),

    #[error("soundfont error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MusicResult<T> = Result<T, MusicError>;
