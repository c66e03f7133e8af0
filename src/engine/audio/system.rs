// rodio-backed sound playback

use log::{debug, info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use super::{AudioError, Sound, SoundPlayer};
use crate::engine::assets::AssetLoader;

/// Output device plus the clips that loaded
///
/// Missing device or clips are logged once at startup; the affected sounds
/// then simply never play.
pub struct AudioSystem {
    // Dropping the stream stops all playback, so it lives as long as we do
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    clips: HashMap<Sound, Arc<[u8]>>,
}

impl AudioSystem {
    /// Open the default output device and load every clip
    pub fn new(loader: &AssetLoader) -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(e) => {
                warn!("{}; sounds disabled", AudioError::from(e));
                return Self::disabled();
            }
        };

        let mut clips = HashMap::new();
        for sound in Sound::ALL {
            match Self::load_clip(loader, sound) {
                Ok(clip) => {
                    clips.insert(sound, clip);
                }
                Err(e) => warn!("{}; {:?} sound disabled", e, sound),
            }
        }

        let system = Self {
            _stream: stream,
            handle,
            clips,
        };
        let ready = Sound::ALL.iter().filter(|s| system.is_enabled(**s)).count();
        info!("Audio ready: {}/{} sounds loaded", ready, Sound::ALL.len());
        system
    }

    /// An audio system that plays nothing
    pub fn disabled() -> Self {
        Self {
            _stream: None,
            handle: None,
            clips: HashMap::new(),
        }
    }

    /// Read a clip and check that it decodes
    pub fn load_clip(loader: &AssetLoader, sound: Sound) -> Result<Arc<[u8]>, AudioError> {
        let bytes: Arc<[u8]> = loader.load_sound_bytes(sound.file_name())?.into();
        Decoder::new(Cursor::new(bytes.clone())).map_err(|source| AudioError::Decode {
            name: sound.file_name(),
            source,
        })?;
        Ok(bytes)
    }

    /// Whether `sound` will actually be heard
    pub fn is_enabled(&self, sound: Sound) -> bool {
        self.handle.is_some() && self.clips.contains_key(&sound)
    }
}

impl SoundPlayer for AudioSystem {
    fn play(&self, sound: Sound) {
        let (Some(handle), Some(clip)) = (&self.handle, self.clips.get(&sound)) else {
            return;
        };

        match Decoder::new(Cursor::new(clip.clone())) {
            Ok(source) => {
                if let Err(e) = handle.play_raw(source.convert_samples()) {
                    debug!("Could not play {:?}: {}", sound, e);
                }
            }
            Err(e) => debug!("Could not decode {:?}: {}", sound, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AssetError;

    #[test]
    fn test_disabled_system_plays_nothing() {
        let audio = AudioSystem::disabled();
        for sound in Sound::ALL {
            assert!(!audio.is_enabled(sound));
            audio.play(sound);
        }
    }

    #[test]
    fn test_missing_clip_is_asset_error() {
        let loader = AssetLoader::new("/definitely/not/here");
        let err = AudioSystem::load_clip(&loader, Sound::Meow).unwrap_err();
        assert!(matches!(err, AudioError::Asset(AssetError::NotFound(_))));
    }

    #[test]
    fn test_garbage_clip_is_decode_error() {
        let root = std::env::temp_dir().join(format!("desk-cat-audio-{}", std::process::id()));
        let dir = root.join("sounds");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("jump.wav"), b"definitely not a wave file").unwrap();

        let loader = AssetLoader::new(&root);
        let err = AudioSystem::load_clip(&loader, Sound::Jump).unwrap_err();
        assert!(matches!(err, AudioError::Decode { name: "jump.wav", .. }));

        let _ = std::fs::remove_dir_all(&root);
    }
}
