use image::DynamicImage;
use tokio::sync::oneshot;
use tokio::task::JoinSet;

use super::{
    AssetCache,
    AssetError,
    AssetSource,
    DecodeTarget,
    FontAsset,
    FontRegistry,
    ImageAsset,
    SoundAsset,
    SoundHandle,
    TextureHandle,
};

/// Renderer-specific texture upload seam.
///
/// Decode internals (pixel formats, GPU residency) belong to the backend; the
/// loader only records the resulting handle under the asset's name.
pub trait TextureBackend {
    fn upload(&mut self, name: &str, image: &DynamicImage) -> Result<TextureHandle, AssetError>;
}

/// Audio backend seam.
///
/// `create_sound` starts decoding and returns a receiver that resolves when
/// the backend reports the handle playable — its own ready signal, which for
/// streaming formats can fire before the payload is fully consumed.
pub trait SoundBackend {
    fn create_sound(
        &mut self,
        config: &SoundAsset,
        bytes: Vec<u8>,
    ) -> oneshot::Receiver<Result<SoundHandle, AssetError>>;

    fn play(&mut self, handle: SoundHandle);
}

async fn read_source(source: AssetSource) -> Result<Vec<u8>, AssetError> {
    match source {
        AssetSource::Inline(bytes) => Ok(bytes),
        AssetSource::Path(path) => Ok(tokio::fs::read(path).await?),
    }
}

/// Fan-out asset loader feeding the caches.
///
/// Every `load_*` batch follows the same discipline: acquisition fans out
/// concurrently, each descriptor settles exactly once (success or failure),
/// and the call returns after the Nth settlement with N fixed at submission.
/// An empty batch returns immediately. Failures never propagate; the affected
/// name simply stays absent.
#[derive(Default)]
pub struct AssetLoader {
    cache: AssetCache,
    fonts: FontRegistry,
    stage_textures: Option<Box<dyn TextureBackend>>,
    scene_textures: Option<Box<dyn TextureBackend>>,
    sounds: Option<Box<dyn SoundBackend>>,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stage_textures(&mut self, backend: Box<dyn TextureBackend>) {
        self.stage_textures = Some(backend);
    }

    pub fn set_scene_textures(&mut self, backend: Box<dyn TextureBackend>) {
        self.scene_textures = Some(backend);
    }

    pub fn set_sound_backend(&mut self, backend: Box<dyn SoundBackend>) {
        self.sounds = Some(backend);
    }

    /// Read-only view of the caches.
    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Loads a batch of images: raw cache entry per success, plus an optional
    /// renderer texture selected by the descriptor's `kind` hint.
    pub async fn load_images(&mut self, images: &[ImageAsset]) {
        let total = images.len();
        let mut set = JoinSet::new();
        for (index, cfg) in images.iter().enumerate() {
            let source = cfg.data.clone();
            set.spawn(async move { (index, read_source(source).await) });
        }

        let mut settled = 0usize;
        while let Some(joined) = set.join_next().await {
            settled += 1;
            let Ok((index, bytes)) = joined else {
                log::warn!("image load task failed to join");
                continue;
            };
            let cfg = &images[index];

            match bytes.and_then(|b| image::load_from_memory(&b).map_err(AssetError::from)) {
                Ok(decoded) => {
                    if let Some(target) = cfg.kind.as_deref().and_then(DecodeTarget::from_hint) {
                        self.decode_texture(&cfg.name, target, &decoded);
                    }
                    self.cache.insert_image(cfg.name.clone(), decoded);
                    log::debug!("loaded image {}", cfg.name);
                }
                Err(err) => log::warn!("image {} failed: {err}", cfg.name),
            }
        }

        debug_assert_eq!(settled, total);
        log::debug!("image batch settled {settled}/{total}");
    }

    /// Loads glyph-atlas fonts: atlas image and 2D texture like any image,
    /// then registers the scheme against the decoded texture. A font whose
    /// texture never materialized settles without a registration.
    pub async fn load_fonts(&mut self, fonts: &[FontAsset]) {
        let total = fonts.len();
        let mut set = JoinSet::new();
        for (index, cfg) in fonts.iter().enumerate() {
            let source = cfg.data.clone();
            set.spawn(async move { (index, read_source(source).await) });
        }

        let mut settled = 0usize;
        while let Some(joined) = set.join_next().await {
            settled += 1;
            let Ok((index, bytes)) = joined else {
                log::warn!("font load task failed to join");
                continue;
            };
            let cfg = &fonts[index];

            match bytes.and_then(|b| image::load_from_memory(&b).map_err(AssetError::from)) {
                Ok(atlas) => {
                    self.decode_texture(&cfg.name, DecodeTarget::Stage2d, &atlas);
                    if self.cache.texture_2d(&cfg.name).is_some() {
                        self.fonts.register(&cfg.scheme, &cfg.name);
                        log::debug!("registered font scheme {} -> {}", cfg.scheme, cfg.name);
                    } else {
                        log::warn!(
                            "font {} has no atlas texture; scheme {} not registered",
                            cfg.name,
                            cfg.scheme,
                        );
                    }
                    self.cache.insert_image(cfg.name.clone(), atlas);
                }
                Err(err) => log::warn!("font {} failed: {err}", cfg.name),
            }
        }

        debug_assert_eq!(settled, total);
        log::debug!("font batch settled {settled}/{total}");
    }

    /// Loads sounds: acquisition fans out, then each sound settles on the
    /// backend's readiness signal rather than byte completion.
    pub async fn load_sounds(&mut self, sounds: &[SoundAsset]) {
        let total = sounds.len();
        let mut set = JoinSet::new();
        for (index, cfg) in sounds.iter().enumerate() {
            let source = cfg.data.clone();
            set.spawn(async move { (index, read_source(source).await) });
        }

        let mut settled = 0usize;
        let mut pending: Vec<(usize, oneshot::Receiver<Result<SoundHandle, AssetError>>)> =
            Vec::new();

        while let Some(joined) = set.join_next().await {
            let Ok((index, bytes)) = joined else {
                settled += 1;
                log::warn!("sound load task failed to join");
                continue;
            };
            let cfg = &sounds[index];

            match bytes {
                Ok(bytes) => match self.sounds.as_mut() {
                    Some(backend) => pending.push((index, backend.create_sound(cfg, bytes))),
                    None => {
                        settled += 1;
                        log::debug!("no sound backend; {} left uncached", cfg.name);
                    }
                },
                Err(err) => {
                    settled += 1;
                    log::warn!("sound {} failed: {err}", cfg.name);
                }
            }
        }

        for (index, ready) in pending {
            settled += 1;
            let cfg = &sounds[index];
            match ready.await {
                Ok(Ok(handle)) => {
                    self.cache.insert_sound(cfg.name.clone(), handle);
                    log::debug!("loaded sound {}", cfg.name);
                }
                Ok(Err(err)) => log::warn!("sound {} failed: {err}", cfg.name),
                Err(_) => log::warn!("sound {}: backend dropped readiness signal", cfg.name),
            }
        }

        debug_assert_eq!(settled, total);
        log::debug!("sound batch settled {settled}/{total}");
    }

    /// Plays a cached sound; a missing name is a no-op.
    pub fn play_sound(&mut self, name: &str) -> Option<SoundHandle> {
        let handle = self.cache.sound(name)?;
        if let Some(backend) = self.sounds.as_mut() {
            backend.play(handle);
        }
        Some(handle)
    }

    /// Secondary, class-specific decode. Failures (including an absent
    /// backend) are isolated: the raw record stays and the batch settles
    /// normally.
    fn decode_texture(&mut self, name: &str, target: DecodeTarget, image: &DynamicImage) {
        let backend = match target {
            DecodeTarget::Stage2d => self.stage_textures.as_mut(),
            DecodeTarget::Scene3d => self.scene_textures.as_mut(),
        };
        let Some(backend) = backend else {
            log::debug!("no {target:?} texture backend; {name} stays raw-only");
            return;
        };

        match backend.upload(name, image) {
            Ok(handle) => match target {
                DecodeTarget::Stage2d => self.cache.insert_texture_2d(name.to_string(), handle),
                DecodeTarget::Scene3d => self.cache.insert_texture_3d(name.to_string(), handle),
            },
            Err(err) => log::warn!("texture decode for {name} ({target:?}) failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetClass;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image::RgbaImage::new(width, height))
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn image_asset(name: &str, bytes: Vec<u8>, kind: Option<&str>) -> ImageAsset {
        ImageAsset {
            name: name.to_string(),
            data: AssetSource::Inline(bytes),
            kind: kind.map(str::to_string),
        }
    }

    /// Issues sequential handles; names in `fail` error on upload.
    #[derive(Default)]
    struct FakeTextures {
        next: u64,
        fail: Vec<String>,
        uploads: Rc<RefCell<Vec<String>>>,
    }

    impl TextureBackend for FakeTextures {
        fn upload(
            &mut self,
            name: &str,
            _image: &DynamicImage,
        ) -> Result<TextureHandle, AssetError> {
            self.uploads.borrow_mut().push(name.to_string());
            if self.fail.iter().any(|n| n == name) {
                return Err(AssetError::TextureUpload("fake upload error".into()));
            }
            self.next += 1;
            Ok(TextureHandle(self.next))
        }
    }

    /// Signals readiness immediately; names in `fail` report a backend error.
    #[derive(Default)]
    struct FakeSounds {
        next: u64,
        fail: Vec<String>,
        played: Rc<RefCell<Vec<SoundHandle>>>,
    }

    impl SoundBackend for FakeSounds {
        fn create_sound(
            &mut self,
            config: &SoundAsset,
            _bytes: Vec<u8>,
        ) -> oneshot::Receiver<Result<SoundHandle, AssetError>> {
            let (tx, rx) = oneshot::channel();
            if self.fail.iter().any(|n| *n == config.name) {
                let _ = tx.send(Err(AssetError::Sound("unsupported codec".into())));
            } else {
                self.next += 1;
                let _ = tx.send(Ok(SoundHandle(self.next)));
            }
            rx
        }

        fn play(&mut self, handle: SoundHandle) {
            self.played.borrow_mut().push(handle);
        }
    }

    // ── batch settlement ──────────────────────────────────────────────────

    #[tokio::test]
    async fn empty_batch_resolves_immediately() {
        let mut loader = AssetLoader::new();
        loader.load_images(&[]).await;
        loader.load_fonts(&[]).await;
        loader.load_sounds(&[]).await;
        assert_eq!(loader.cache().count(AssetClass::Image), 0);
    }

    #[tokio::test]
    async fn partial_failure_settles_and_isolates() {
        let uploads = Rc::new(RefCell::new(Vec::new()));
        let mut loader = AssetLoader::new();
        loader.set_stage_textures(Box::new(FakeTextures {
            uploads: Rc::clone(&uploads),
            ..Default::default()
        }));

        let batch = [
            image_asset("first", png_bytes(2, 2), Some("2d")),
            image_asset("broken", b"not an image".to_vec(), Some("2d")),
            image_asset("third", png_bytes(4, 4), Some("2d")),
        ];
        loader.load_images(&batch).await;

        let cache = loader.cache();
        assert!(cache.image("first").is_some());
        assert!(cache.image("broken").is_none());
        assert!(cache.image("third").is_some());
        assert!(cache.texture_2d("first").is_some());
        assert!(cache.texture_2d("broken").is_none());
        assert!(cache.texture_2d("third").is_some());
        // Only the two decodable assets reached the backend.
        assert_eq!(uploads.borrow().len(), 2);
    }

    #[tokio::test]
    async fn later_load_overwrites_same_name() {
        let mut loader = AssetLoader::new();

        loader
            .load_images(&[image_asset("logo", png_bytes(2, 2), None)])
            .await;
        loader
            .load_images(&[image_asset("logo", png_bytes(8, 8), None)])
            .await;

        let logo = loader.cache().image("logo").unwrap();
        assert_eq!(logo.width(), 8);
        assert_eq!(loader.cache().count(AssetClass::Image), 1);
    }

    // ── secondary decode ──────────────────────────────────────────────────

    #[tokio::test]
    async fn failed_texture_decode_keeps_raw_record() {
        let mut loader = AssetLoader::new();
        loader.set_stage_textures(Box::new(FakeTextures {
            fail: vec!["logo".into()],
            ..Default::default()
        }));

        loader
            .load_images(&[image_asset("logo", png_bytes(2, 2), Some("2d"))])
            .await;

        assert!(loader.cache().image("logo").is_some());
        assert!(loader.cache().texture_2d("logo").is_none());
    }

    #[tokio::test]
    async fn hint_selects_the_cache_class() {
        let mut loader = AssetLoader::new();
        loader.set_stage_textures(Box::new(FakeTextures::default()));
        loader.set_scene_textures(Box::new(FakeTextures::default()));

        let batch = [
            image_asset("stage_art", png_bytes(2, 2), Some("2d")),
            image_asset("scene_art", png_bytes(2, 2), Some("3d")),
            image_asset("raw_only", png_bytes(2, 2), None),
        ];
        loader.load_images(&batch).await;

        let cache = loader.cache();
        assert!(cache.texture_2d("stage_art").is_some());
        assert!(cache.texture_3d("stage_art").is_none());
        assert!(cache.texture_3d("scene_art").is_some());
        assert!(cache.texture_2d("raw_only").is_none());
        assert_eq!(cache.count(AssetClass::Image), 3);
    }

    #[tokio::test]
    async fn missing_backend_means_raw_only() {
        let mut loader = AssetLoader::new();
        loader
            .load_images(&[image_asset("logo", png_bytes(2, 2), Some("2d"))])
            .await;

        assert!(loader.cache().image("logo").is_some());
        assert!(loader.cache().texture_2d("logo").is_none());
    }

    // ── fonts ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn fonts_register_schemes_only_for_decoded_atlases() {
        let mut loader = AssetLoader::new();
        loader.set_stage_textures(Box::new(FakeTextures::default()));

        let batch = [
            FontAsset {
                name: "font_headline".into(),
                data: AssetSource::Inline(png_bytes(16, 16)),
                scheme: "headline".into(),
            },
            FontAsset {
                name: "font_broken".into(),
                data: AssetSource::Inline(b"garbage".to_vec()),
                scheme: "body".into(),
            },
        ];
        loader.load_fonts(&batch).await;

        assert_eq!(loader.fonts().texture_for("headline"), Some("font_headline"));
        assert!(!loader.fonts().contains("body"));
        assert!(loader.cache().texture_2d("font_headline").is_some());
    }

    // ── sounds ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn sounds_settle_on_backend_readiness() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut loader = AssetLoader::new();
        loader.set_sound_backend(Box::new(FakeSounds {
            fail: vec!["static".into()],
            played: Rc::clone(&played),
            ..Default::default()
        }));

        let sound = |name: &str| SoundAsset {
            name: name.to_string(),
            data: AssetSource::Inline(vec![0u8; 8]),
            volume: 0.5,
            looped: false,
        };
        loader
            .load_sounds(&[sound("engine"), sound("static")])
            .await;

        assert!(loader.cache().sound("engine").is_some());
        assert!(loader.cache().sound("static").is_none());

        assert!(loader.play_sound("engine").is_some());
        assert!(loader.play_sound("missing").is_none());
        assert_eq!(played.borrow().len(), 1);
    }

    #[tokio::test]
    async fn sounds_without_backend_settle_uncached() {
        let mut loader = AssetLoader::new();
        loader
            .load_sounds(&[SoundAsset {
                name: "engine".into(),
                data: AssetSource::Inline(vec![0u8; 8]),
                volume: 1.0,
                looped: true,
            }])
            .await;

        assert!(loader.cache().sound("engine").is_none());
    }
}
