//! 3D mesh and material configuration.
//!
//! Entries are caller-supplied, looked up by name, and passed through to the
//! 3D backend opaquely; the runtime validates nothing beyond the shape.

use std::collections::HashMap;

use serde::Deserialize;

/// Material lighting model understood by 3D backends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialKind {
    Lambert,
    Standard,
}

/// One material entry; `params` is a backend-specific bag passed through
/// untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialConfig {
    pub kind: MaterialKind,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// One mesh entry bound to a material.
#[derive(Debug, Clone, Deserialize)]
pub struct MeshConfig {
    pub name: String,
    pub material: MaterialConfig,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Caller-supplied mesh collection, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct MeshLibrary {
    entries: HashMap<String, MeshConfig>,
}

impl MeshLibrary {
    /// Builds the library; a repeated name keeps the later entry.
    pub fn from_entries(entries: Vec<MeshConfig>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.insert(entry.name.clone(), entry);
        }
        Self { entries: map }
    }

    pub fn get(&self, name: &str) -> Option<&MeshConfig> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
