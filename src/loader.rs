//! Resolving named parts to loaded subtrees.
//!
//! The engine never parses model files itself. It asks an [`AssetLoader`]
//! for each part by name (`"housing"`, `"lid"`, `"fuel_unit"`) and treats
//! any failure as fatal.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ReactorError;
use crate::parts::PartSubtree;

/// Source of loaded part subtrees.
pub trait AssetLoader {
    /// Load the part called `name`.
    fn load_part(&mut self, name: &str) -> Result<PartSubtree, ReactorError>;
}

/// Loader backed by an in-memory map. Useful for hosts that load models
/// themselves and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    parts: HashMap<String, PartSubtree>,
}

impl MemoryLoader {
    /// Empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a part.
    pub fn insert(&mut self, name: impl Into<String>, subtree: PartSubtree) {
        let _ = self.parts.insert(name.into(), subtree);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_part(mut self, name: impl Into<String>, subtree: PartSubtree) -> Self {
        self.insert(name, subtree);
        self
    }
}

impl AssetLoader for MemoryLoader {
    fn load_part(&mut self, name: &str) -> Result<PartSubtree, ReactorError> {
        self.parts
            .get(name)
            .cloned()
            .ok_or_else(|| ReactorError::asset_load(name, "not registered"))
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    parts: HashMap<String, PartSubtree>,
}

/// Loader reading every part from one TOML manifest.
///
/// ```toml
/// [parts.lid]
/// title = "Lid"
/// description = "Top closure"
///
/// [[parts.lid.meshes]]
/// name = "plate"
/// shape = { kind = "box", min = [-0.8, 0.0, -0.8], max = [0.8, 0.2, 0.8] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    inner: MemoryLoader,
}

impl ManifestLoader {
    /// Parse a manifest from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ReactorError> {
        let manifest: Manifest = toml::from_str(content)
            .map_err(|e| ReactorError::ManifestParse(e.to_string()))?;
        log::debug!("manifest lists {} parts", manifest.parts.len());
        Ok(Self {
            inner: MemoryLoader {
                parts: manifest.parts,
            },
        })
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, ReactorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl AssetLoader for ManifestLoader {
    fn load_part(&mut self, name: &str) -> Result<PartSubtree, ReactorError> {
        self.inner.load_part(name)
    }
}
