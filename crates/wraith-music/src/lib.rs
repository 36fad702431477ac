//! Wraith Music - Format Sniffing and Playback Sequencing
//!
//! This crate decides what a lump of music data is and drives its playback
//! through a host-supplied mixer. MUS scores are converted to standard MIDI
//! before loading; data no magic identifies is offered to each typed decoder
//! in a fixed order. MIDI pause is emulated by muting, since MIDI decoders
//! keep the sequencer running while paused.
//!
//! # Example
//!
//! ```ignore
//! use wraith_music::{MusicDriver, scale_volume};
//!
//! let mut driver = MusicDriver::new(sdl_mixer, Box::new(mus2midi));
//! driver.init()?;
//! driver.register(&std::fs::read("d_ashfall.mus")?)?;
//! driver.set_volume(scale_volume(settings.derived().music_volume));
//! driver.play(true)?;
//! ```
//!
//! # Module Structure
//!
//! - [`format`]: Magic-number sniffing and the format taxonomy
//! - [`driver`]: The playback driver and the mixer/converter seams
//! - [`soundfont`]: Synthesizer configuration for software MIDI
//! - [`error`]: Error types shared across the crate

pub mod driver;
pub mod error;
pub mod format;
pub mod soundfont;

pub use driver::{scale_volume, MusConverter, MusicDriver, Mixer, MAX_VOLUME};
pub use error::{MusicError, MusicResult};
pub use format::{detect, probe, MusicFormat};
pub use soundfont::{SoundfontConfig, SoundfontStatus};
