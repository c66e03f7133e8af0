// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Directory under the asset root holding sound clips
pub const SOUND_DIRECTORY: &str = "sounds";

/// Environment variable overriding the asset root
pub const ASSET_ROOT_ENV: &str = "DESK_CAT_ASSETS";

/// Asset root used when the environment does not name one
pub const DEFAULT_ASSET_ROOT: &str = "assets";

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Loader rooted at `$DESK_CAT_ASSETS`, or `assets/` when unset
    pub fn from_env() -> Self {
        match std::env::var_os(ASSET_ROOT_ENV) {
            Some(root) => Self::new(root),
            None => Self::new(DEFAULT_ASSET_ROOT),
        }
    }

    /// Get the full path for a sound clip
    pub fn sound_path(&self, name: &str) -> PathBuf {
        self.base_path.join(SOUND_DIRECTORY).join(name)
    }

    /// Read a sound clip from disk
    pub fn load_sound_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.sound_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let bytes = std::fs::read(&path)?;
        if bytes.is_empty() {
            return Err(AssetError::LoadError(format!("{} is empty", name)));
        }
        Ok(bytes)
    }
}
