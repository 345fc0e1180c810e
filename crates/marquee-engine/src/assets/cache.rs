use std::collections::HashMap;

use image::DynamicImage;

/// Opaque renderer texture id issued by a texture backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle(pub u64);

/// Opaque audio handle issued by a sound backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SoundHandle(pub u64);

/// Asset class selecting one of the independent cache maps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AssetClass {
    Image,
    Texture2d,
    Texture3d,
    Sound,
}

/// Named stores for decoded assets, one map per class.
///
/// A name may exist in several class maps at once (a raw image plus its
/// renderer texture). Writes are last-writer-wins per name; absence is a
/// normal outcome callers handle by skipping.
#[derive(Default)]
pub struct AssetCache {
    images: HashMap<String, DynamicImage>,
    textures_2d: HashMap<String, TextureHandle>,
    textures_3d: HashMap<String, TextureHandle>,
    sounds: HashMap<String, SoundHandle>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self, name: &str) -> Option<&DynamicImage> {
        self.images.get(name)
    }

    pub fn texture_2d(&self, name: &str) -> Option<TextureHandle> {
        self.textures_2d.get(name).copied()
    }

    pub fn texture_3d(&self, name: &str) -> Option<TextureHandle> {
        self.textures_3d.get(name).copied()
    }

    pub fn sound(&self, name: &str) -> Option<SoundHandle> {
        self.sounds.get(name).copied()
    }

    pub fn contains(&self, class: AssetClass, name: &str) -> bool {
        match class {
            AssetClass::Image => self.images.contains_key(name),
            AssetClass::Texture2d => self.textures_2d.contains_key(name),
            AssetClass::Texture3d => self.textures_3d.contains_key(name),
            AssetClass::Sound => self.sounds.contains_key(name),
        }
    }

    pub fn count(&self, class: AssetClass) -> usize {
        match class {
            AssetClass::Image => self.images.len(),
            AssetClass::Texture2d => self.textures_2d.len(),
            AssetClass::Texture3d => self.textures_3d.len(),
            AssetClass::Sound => self.sounds.len(),
        }
    }

    pub(crate) fn insert_image(&mut self, name: String, image: DynamicImage) {
        self.images.insert(name, image);
    }

    pub(crate) fn insert_texture_2d(&mut self, name: String, handle: TextureHandle) {
        self.textures_2d.insert(name, handle);
    }

    pub(crate) fn insert_texture_3d(&mut self, name: String, handle: TextureHandle) {
        self.textures_3d.insert(name, handle);
    }

    pub(crate) fn insert_sound(&mut self, name: String, handle: SoundHandle) {
        self.sounds.insert(name, handle);
    }
}
