// Asset loading
//
// The only assets are a few fixed sound clips; everything else is drawn
// procedurally.

mod loader;

pub use loader::AssetLoader;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("meow.wav".to_string());
        assert_eq!(err.to_string(), "Asset not found: meow.wav");
    }
}
