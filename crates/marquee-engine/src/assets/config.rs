use std::path::PathBuf;

use serde::Deserialize;

/// Where a payload's bytes come from.
///
/// Assets arrive pre-resolved: either inline encoded bytes (the data-URI
/// case) or a path the host's bundle layout already resolved. There is no
/// URL fetching here.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AssetSource {
    Path(PathBuf),
    Inline(Vec<u8>),
}

/// Secondary decode target selected by an image's `kind` hint.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DecodeTarget {
    Stage2d,
    Scene3d,
}

impl DecodeTarget {
    /// Maps a config hint to a target; unknown hints mean raw-cache only.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "2d" | "stage" => Some(DecodeTarget::Stage2d),
            "3d" | "scene" => Some(DecodeTarget::Scene3d),
            _ => None,
        }
    }
}

/// Image descriptor. `kind` optionally selects a renderer texture decode on
/// top of the raw cache entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageAsset {
    pub name: String,
    pub data: AssetSource,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Glyph-atlas font descriptor. The atlas image is decoded like any 2D
/// texture, then registered under `scheme`.
#[derive(Debug, Clone, Deserialize)]
pub struct FontAsset {
    pub name: String,
    pub data: AssetSource,
    pub scheme: String,
}

/// Sound descriptor. Settlement follows the audio backend's own readiness,
/// not byte acquisition, since streaming formats can report playable early.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundAsset {
    pub name: String,
    pub data: AssetSource,
    pub volume: f32,
    #[serde(rename = "loop")]
    pub looped: bool,
}
