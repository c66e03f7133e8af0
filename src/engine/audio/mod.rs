// Fire-and-forget sound effects
//
// Playback is a capability (`SoundPlayer`) handed to whoever triggers a gag.
// `AudioSystem` plays through rodio, or nothing at all when no output device
// could be opened.

mod system;

pub use system::AudioSystem;

use crate::engine::assets::AssetError;

/// The fixed set of sound clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Jump,
    Meow,
    Tongue,
}

impl Sound {
    pub const ALL: [Sound; 3] = [Sound::Jump, Sound::Meow, Sound::Tongue];

    /// File name under the sounds directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Jump => "jump.wav",
            Self::Meow => "meow.wav",
            Self::Tongue => "tongue.wav",
        }
    }
}

/// Something that can start a sound without blocking
pub trait SoundPlayer {
    fn play(&self, sound: Sound);
}

/// Audio errors; all are recovered by disabling the affected sound
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("No audio output device: {0}")]
    NoDevice(#[from] rodio::StreamError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("Could not decode {name}: {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_are_distinct() {
        let names: HashSet<_> = Sound::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), Sound::ALL.len());
    }

    #[test]
    fn test_asset_error_converts() {
        let err: AudioError = AssetError::NotFound("x.wav".into()).into();
        assert_eq!(err.to_string(), "Asset not found: x.wav");
    }
}
