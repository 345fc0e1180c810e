use std::collections::HashMap;

/// Named font schemes registered against decoded glyph-atlas textures.
///
/// A scheme maps to the cache name of its atlas; text renderers resolve the
/// texture through the cache at draw time.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    schemes: HashMap<String, String>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or re-registers) a scheme against an atlas texture name.
    pub fn register(&mut self, scheme: &str, texture_name: &str) {
        self.schemes
            .insert(scheme.to_string(), texture_name.to_string());
    }

    pub fn texture_for(&self, scheme: &str) -> Option<&str> {
        self.schemes.get(scheme).map(String::as_str)
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.contains_key(scheme)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
