//! The assembled snapshot document and its file sink.
//!
//! The artifact's top level is the registry mapping itself, with no metadata
//! envelope, so downstream consumers index straight into it by registry name.

use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One registry: identifier → entry value. Iteration order is insertion
/// order, which the aggregator guarantees to be ascending identifier order.
pub type Registry = IndexMap<String, Value>;

/// The full output document: registry name → registry.
///
/// Key order is the order registries were inserted in, i.e. manifest order
/// among the registries that were present. The serializer must not re-sort,
/// which is why both map levels are `IndexMap`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrySet {
    registries: IndexMap<String, Registry>,
}

impl RegistrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a completed registry under its configured name.
    pub fn insert(&mut self, name: impl Into<String>, registry: Registry) {
        self.registries.insert(name.into(), registry);
    }

    /// Number of registries present in the document.
    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Registry> {
        self.registries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registries.contains_key(name)
    }

    /// Registry names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(|s| s.as_str())
    }

    /// Registries with their names, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Registry)> {
        self.registries.iter().map(|(name, reg)| (name.as_str(), reg))
    }

    /// Total entry count across all registries.
    pub fn entry_count(&self) -> usize {
        self.registries.values().map(|r| r.len()).sum()
    }

    /// Load a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize with pretty formatting, key order as assembled.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Write the serialized artifact to `path`, replacing any previous file.
///
/// The caller serializes first so that nothing touches the filesystem until
/// the whole document exists in memory.
pub fn write_artifact(path: &Path, json: &str, gzip: bool) -> anyhow::Result<()> {
    if gzip {
        use flate2::Compression;
        use flate2::write::GzEncoder;

        let file = std::fs::File::create(path)?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(json.as_bytes())?;
        encoder.finish()?;
    } else {
        std::fs::write(path, json)?;
    }
    Ok(())
}
