//! Manifest types and the embedded default table.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One configured registry: where its entry files live and the name it is
/// published under in the snapshot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDescriptor {
    /// Directory scanned for entry files, resolved against the data root.
    pub root: PathBuf,

    /// Snapshot key for this registry, e.g. `minecraft:cat_variant`.
    pub name: String,
}

impl RegistryDescriptor {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }
}

/// Ordered set of registries to aggregate.
///
/// Sequence order in the manifest is the top-level key order of the snapshot
/// document, so the manifest format is a list, not a map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub registries: Vec<RegistryDescriptor>,
}

impl Manifest {
    /// The registry table the stock data set ships with.
    pub fn builtin() -> Self {
        let entry = RegistryDescriptor::new;
        Self {
            registries: vec![
                entry("data/minecraft/cat_variant", "minecraft:cat_variant"),
                entry("data/minecraft/chicken_variant", "minecraft:chicken_variant"),
                entry("data/minecraft/cow_variant", "minecraft:cow_variant"),
                entry("data/minecraft/frog_variant", "minecraft:frog_variant"),
                entry("data/minecraft/painting_variant", "minecraft:painting_variant"),
                entry("data/minecraft/pig_variant", "minecraft:pig_variant"),
                entry(
                    "data/minecraft/wolf_sound_variant",
                    "minecraft:wolf_sound_variant",
                ),
                entry("data/minecraft/wolf_variant", "minecraft:wolf_variant"),
                entry("data/minecraft/worldgen/biome", "minecraft:worldgen/biome"),
            ],
        }
    }

    /// Parse a manifest from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Re-root every descriptor against `base`.
    ///
    /// Manifest roots are usually relative; `--data-root` decides what they
    /// are relative to.
    pub fn resolved_against(mut self, base: &Path) -> Self {
        for descriptor in &mut self.registries {
            descriptor.root = base.join(&descriptor.root);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let manifest = Manifest::builtin();
        assert_eq!(manifest.len(), 9);
        assert_eq!(manifest.registries[0].name, "minecraft:cat_variant");
        assert_eq!(
            manifest.registries.last().unwrap().name,
            "minecraft:worldgen/biome"
        );
    }

    #[test]
    fn test_from_yaml_preserves_order() {
        let yaml = r#"
registries:
  - root: data/minecraft/wolf_variant
    name: minecraft:wolf_variant
  - root: data/minecraft/cat_variant
    name: minecraft:cat_variant
"#;
        let manifest = Manifest::from_yaml(yaml).unwrap();
        let names: Vec<&str> = manifest.registries.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["minecraft:wolf_variant", "minecraft:cat_variant"]);
    }

    #[test]
    fn test_from_yaml_empty() {
        let manifest = Manifest::from_yaml("registries: []").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_resolved_against() {
        let manifest = Manifest {
            registries: vec![RegistryDescriptor::new("cat_variant", "minecraft:cat_variant")],
        }
        .resolved_against(Path::new("/srv/data"));

        assert_eq!(
            manifest.registries[0].root,
            PathBuf::from("/srv/data/cat_variant")
        );
    }
}
