use thiserror::Error;

/// Per-asset failure.
///
/// These never reach a batch caller: the loader logs them, counts the asset
/// as settled, and leaves the name absent from the affected cache.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset source: {0}")]
    Acquire(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("texture upload failed: {0}")]
    TextureUpload(String),

    #[error("audio backend failed: {0}")]
    Sound(String),

    #[error("no backend registered for this asset class")]
    NoBackend,
}
