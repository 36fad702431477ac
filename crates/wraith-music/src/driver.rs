//! The sequential music driver.
//!
//! The driver owns playback state and format dispatch; the platform mixer
//! and the MUS converter are supplied by the host. Everything is
//! synchronous and single-threaded, matching the engine's main loop.

use crate::error::{MusicError, MusicResult};
use crate::format::{self, MusicFormat};

/// Mixer channel volume range. Engine-side volumes run 0 to 15 and are
/// scaled up with [`scale_volume`].
pub const MAX_VOLUME: i32 = 128;

const ENGINE_VOLUME_STEPS: i32 = 15;

/// Scales an engine volume (0..=15) to mixer units.
pub fn scale_volume(engine_volume: i32) -> i32 {
    engine_volume.clamp(0, ENGINE_VOLUME_STEPS) * MAX_VOLUME / ENGINE_VOLUME_STEPS
}

/// The platform mixer. One piece of music is loaded at a time.
pub trait Mixer {
    /// Opens the audio device.
    fn open(&mut self) -> MusicResult<()>;

    /// Closes the device, releasing any loaded music.
    fn close(&mut self);

    /// Tries to load `data` as `format`, replacing the loaded music.
    fn load(&mut self, format: MusicFormat, data: &[u8]) -> MusicResult<()>;

    /// Releases the loaded music without closing the device.
    fn unload(&mut self);

    /// Starts the loaded music from the top.
    fn play(&mut self, looping: bool) -> MusicResult<()>;

    /// Stops playback, keeping the music loaded.
    fn halt(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    /// Sets the music channel volume in mixer units.
    fn set_volume(&mut self, volume: i32);

    /// Current music channel volume in mixer units.
    fn volume(&self) -> i32;
}

/// Converts a MUS score to standard MIDI bytes.
pub trait MusConverter {
    fn convert(&self, mus: &[u8]) -> MusicResult<Vec<u8>>;
}

/// Load order for data neither magic identifies.
const LOAD_ORDER: [MusicFormat; 6] = [
    MusicFormat::Midi,
    MusicFormat::Ogg,
    MusicFormat::Mp3,
    MusicFormat::Wav,
    MusicFormat::Flac,
    MusicFormat::Mod,
];

pub struct MusicDriver<M: Mixer> {
    mixer: M,
    converter: Box<dyn MusConverter>,
    initialized: bool,
    registered: MusicFormat,
    playing: bool,
    paused: bool,
    current_volume: i32,
    /// Volume stashed while MIDI playback is "paused" by muting it.
    paused_midi_volume: Option<i32>,
}

impl<M: Mixer> MusicDriver<M> {
    pub fn new(mixer: M, converter: Box<dyn MusConverter>) -> Self {
        MusicDriver {
            mixer,
            converter,
            initialized: false,
            registered: MusicFormat::None,
            playing: false,
            paused: false,
            current_volume: MAX_VOLUME,
            paused_midi_volume: None,
        }
    }

    /// Opens the audio device. Idempotent.
    pub fn init(&mut self) -> MusicResult<()> {
        if self.initialized {
            return Ok(());
        }
        self.mixer.open()?;
        self.initialized = true;
        Ok(())
    }

    /// Stops everything and closes the device. Idempotent.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.stop();
        self.unregister();
        self.mixer.close();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn registered(&self) -> MusicFormat {
        self.registered
    }

    /// Identifies and loads one piece of music. MUS data is converted to
    /// MIDI first; unrecognized data is offered to each typed loader in a
    /// fixed order.
    pub fn register(&mut self, data: &[u8]) -> MusicResult<MusicFormat> {
        if !self.initialized {
            return Err(MusicError::NotInitialized);
        }
        self.unregister();

        match format::detect(data) {
            MusicFormat::Midi => {
                self.mixer.load(MusicFormat::Midi, data)?;
                self.registered = MusicFormat::Midi;
            }
            MusicFormat::Mus => {
                let midi = self.converter.convert(data)?;
                self.mixer.load(MusicFormat::Midi, &midi)?;
                self.registered = MusicFormat::Mus;
            }
            _ => {
                let loaded = LOAD_ORDER
                    .iter()
                    .find(|&&f| self.mixer.load(f, data).is_ok());
                match loaded {
                    Some(&f) => self.registered = f,
                    None => return Err(MusicError::UnrecognizedFormat),
                }
            }
        }
        Ok(self.registered)
    }

    /// Releases the registered music.
    pub fn unregister(&mut self) {
        if self.registered != MusicFormat::None {
            self.stop();
            self.mixer.unload();
            self.registered = MusicFormat::None;
        }
    }

    pub fn play(&mut self, looping: bool) -> MusicResult<()> {
        if !self.initialized {
            return Err(MusicError::NotInitialized);
        }
        if self.registered == MusicFormat::None {
            return Err(MusicError::NothingRegistered);
        }
        self.mixer.play(looping)?;
        self.mixer.set_volume(self.current_volume);
        self.playing = true;
        self.paused = false;
        self.paused_midi_volume = None;
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.playing {
            self.mixer.halt();
            self.playing = false;
            self.paused = false;
            self.paused_midi_volume = None;
        }
    }

    /// Pauses playback. MIDI decoders keep running when paused, so MIDI is
    /// muted instead and the volume restored on resume.
    pub fn pause(&mut self) {
        if !self.playing || self.paused {
            return;
        }
        if self.plays_as_midi() {
            self.paused_midi_volume = Some(self.mixer.volume());
            self.mixer.set_volume(0);
        } else {
            self.mixer.pause();
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        match self.paused_midi_volume.take() {
            Some(volume) => self.mixer.set_volume(volume),
            None => self.mixer.resume(),
        }
        self.paused = false;
    }

    /// Sets the music volume in mixer units. While MIDI is muted for a
    /// pause, the new volume lands in the stash.
    pub fn set_volume(&mut self, volume: i32) {
        self.current_volume = volume.clamp(0, MAX_VOLUME);
        if self.paused_midi_volume.is_some() {
            self.paused_midi_volume = Some(self.current_volume);
        } else {
            self.mixer.set_volume(self.current_volume);
        }
    }

    pub fn volume(&self) -> i32 {
        self.current_volume
    }

    fn plays_as_midi(&self) -> bool {
        matches!(self.registered, MusicFormat::Midi | MusicFormat::Mus)
    }
}
