//! Asset loading and caches.
//!
//! Batches of name+payload descriptors fan out into independent async loads
//! and settle through a completion barrier: the batch resolves once every
//! descriptor has either produced a cached record or a terminal failure,
//! never before and never more than once. Individual failures are absorbed —
//! a broken asset leaves its name absent from the cache and the creative
//! degrades instead of halting.
//!
//! Backend-specific decoding (texture upload, audio readiness) happens behind
//! the [`TextureBackend`] and [`SoundBackend`] seams; this module only decides
//! when a load counts as settled and where its result lives.

mod cache;
mod config;
mod error;
mod fonts;
mod loader;

pub use cache::{AssetCache, AssetClass, SoundHandle, TextureHandle};
pub use config::{AssetSource, DecodeTarget, FontAsset, ImageAsset, SoundAsset};
pub use error::AssetError;
pub use fonts::FontRegistry;
pub use loader::{AssetLoader, SoundBackend, TextureBackend};
