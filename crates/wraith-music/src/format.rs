//! Music format identification.
//!
//! Registration only trusts two magics: standard MIDI and the legacy MUS
//! container, which gets converted before loading. Everything else is
//! handed to the mixer's typed loaders in a fixed order. The wider
//! [`probe`] exists for diagnostics and recognizes the common container
//! magics without loading anything.

use byteorder::{ByteOrder, LittleEndian};

/// Formats the driver can hand to a mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicFormat {
    None,
    Midi,
    Mus,
    Ogg,
    Mp3,
    Wav,
    Flac,
    Mod,
}

impl MusicFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicFormat::None => "unknown",
            MusicFormat::Midi => "MIDI",
            MusicFormat::Mus => "MUS",
            MusicFormat::Ogg => "Ogg Vorbis",
            MusicFormat::Mp3 => "MP3",
            MusicFormat::Wav => "WAV",
            MusicFormat::Flac => "FLAC",
            MusicFormat::Mod => "MOD",
        }
    }
}

impl std::fmt::Display for MusicFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Smallest buffer a MIDI header check accepts.
const MIDI_MIN_LEN: usize = 14;

/// MUS header size: the magic plus six little-endian words.
const MUS_HEADER_LEN: usize = 16;

pub fn is_midi(data: &[u8]) -> bool {
    data.len() >= MIDI_MIN_LEN && data.starts_with(b"MThd")
}

/// A MUS header must carry a score block that fits inside the buffer.
pub fn is_mus(data: &[u8]) -> bool {
    if data.len() < MUS_HEADER_LEN || !data.starts_with(b"MUS\x1a") {
        return false;
    }
    let score_len = LittleEndian::read_u16(&data[4..6]) as usize;
    let score_start = LittleEndian::read_u16(&data[6..8]) as usize;
    score_start >= MUS_HEADER_LEN && score_start + score_len <= data.len()
}

/// The sniff used at registration: MIDI and MUS only.
pub fn detect(data: &[u8]) -> MusicFormat {
    if is_midi(data) {
        MusicFormat::Midi
    } else if is_mus(data) {
        MusicFormat::Mus
    } else {
        MusicFormat::None
    }
}

/// Extended magic probe for diagnostics.
pub fn probe(data: &[u8]) -> MusicFormat {
    match detect(data) {
        MusicFormat::None => {}
        known => return known,
    }
    if data.starts_with(b"OggS") {
        MusicFormat::Ogg
    } else if data.starts_with(b"fLaC") {
        MusicFormat::Flac
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WAVE" {
        MusicFormat::Wav
    } else if data.starts_with(b"ID3")
        || (data.len() >= 2 && data[0] == 0xff && data[1] & 0xe0 == 0xe0)
    {
        MusicFormat::Mp3
    } else if data.len() >= 1084
        && (&data[1080..1084] == b"M.K."
            || &data[1080..1084] == b"M!K!"
            || &data[1080..1084] == b"FLT4")
    {
        MusicFormat::Mod
    } else {
        MusicFormat::None
    }
}


#[cfg(test)]
mod tests {
    use super::testdata::{midi_bytes, mus_bytes};
    use super::*;

    #[test]
    fn midi_needs_magic_and_length() {
        assert!(is_midi(&midi_bytes()));
        assert!(!is_midi(b"MThd"));
        assert!(!is_midi(b"MUS\x1athis is not midi"));
    }

    #[test]
    fn mus_validates_score_bounds() {
        assert!(is_mus(&mus_bytes()));

        // Score length pointing past the end of the buffer.
        let mut truncated = mus_bytes();
        truncated[4] = 0xff;
        truncated[5] = 0xff;
        assert!(!is_mus(&truncated));

        // Score start inside the header.
        let mut overlapping = mus_bytes();
        overlapping[6] = 4;
        overlapping[7] = 0;
        assert!(!is_mus(&overlapping));

        assert!(!is_mus(b"MUS\x1a"));
    }

    #[test]
    fn detect_only_trusts_midi_and_mus() {
        assert_eq!(detect(&midi_bytes()), MusicFormat::Midi);
        assert_eq!(detect(&mus_bytes()), MusicFormat::Mus);
        assert_eq!(detect(b"OggS rest of a stream"), MusicFormat::None);
        assert_eq!(detect(&[]), MusicFormat::None);
    }

    #[test]
    fn probe_recognizes_container_magics() {
        assert_eq!(probe(b"OggS followed by pages"), MusicFormat::Ogg);
        assert_eq!(probe(b"fLaC stream"), MusicFormat::Flac);

        let mut wav = b"RIFF".to_vec();
        wav.extend_from_slice(&[0; 4]);
        wav.extend_from_slice(b"WAVE");
        assert_eq!(probe(&wav), MusicFormat::Wav);

        assert_eq!(probe(b"ID3\x03rest"), MusicFormat::Mp3);
        assert_eq!(probe(&[0xff, 0xfb, 0x90, 0x00]), MusicFormat::Mp3);

        let mut module = vec![0u8; 1084];
        module[1080..1084].copy_from_slice(b"M.K.");
        assert_eq!(probe(&module), MusicFormat::Mod);

        assert_eq!(probe(b"plain text"), MusicFormat::None);
    }
}
