//! Manifest resolution across locations.
//!
//! First-found-wins, highest priority first: an explicit CLI path, then the
//! project-local manifest file, then the compiled-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::Manifest;

/// Project-local manifest filename, looked up in the working directory.
pub const PROJECT_MANIFEST: &str = "regsnap.yaml";

/// Where a manifest was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Explicit `--manifest` path.
    Explicit(PathBuf),
    /// Project-local manifest file.
    Project(PathBuf),
    /// Compiled-in default table.
    Builtin,
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Explicit(path) => write!(f, "{}", path.display()),
            ManifestSource::Project(path) => write!(f, "{}", path.display()),
            ManifestSource::Builtin => write!(f, "builtin"),
        }
    }
}

/// Resolve and load the manifest relative to the working directory.
pub fn load_manifest(explicit: Option<&Path>) -> Result<(Manifest, ManifestSource)> {
    load_manifest_in(Path::new("."), explicit)
}

/// Resolve and load the manifest with an explicit project directory.
///
/// An explicit path that cannot be read or parsed is an error; a missing
/// project file silently falls back to the built-in table.
pub fn load_manifest_in(
    project_dir: &Path,
    explicit: Option<&Path>,
) -> Result<(Manifest, ManifestSource)> {
    if let Some(path) = explicit {
        let manifest = read_manifest(path)?;
        return Ok((manifest, ManifestSource::Explicit(path.to_path_buf())));
    }

    let project = project_dir.join(PROJECT_MANIFEST);
    if project.is_file() {
        let manifest = read_manifest(&project)?;
        return Ok((manifest, ManifestSource::Project(project)));
    }

    Ok((Manifest::builtin(), ManifestSource::Builtin))
}

fn read_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    Manifest::from_yaml(&content)
        .with_context(|| format!("invalid manifest {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fallback_to_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let (manifest, source) = load_manifest_in(temp_dir.path(), None).unwrap();
        assert_eq!(source, ManifestSource::Builtin);
        assert_eq!(manifest.len(), Manifest::builtin().len());
    }

    #[test]
    fn test_project_manifest_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROJECT_MANIFEST);
        fs::write(
            &path,
            "registries:\n  - root: data/custom\n    name: minecraft:custom\n",
        )
        .unwrap();

        let (manifest, source) = load_manifest_in(temp_dir.path(), None).unwrap();
        assert_eq!(source, ManifestSource::Project(path));
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.registries[0].name, "minecraft:custom");
    }

    #[test]
    fn test_explicit_wins_over_project() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_MANIFEST),
            "registries:\n  - root: a\n    name: minecraft:from_project\n",
        )
        .unwrap();
        let explicit = temp_dir.path().join("other.yaml");
        fs::write(
            &explicit,
            "registries:\n  - root: b\n    name: minecraft:from_explicit\n",
        )
        .unwrap();

        let (manifest, source) = load_manifest_in(temp_dir.path(), Some(&explicit)).unwrap();
        assert_eq!(source, ManifestSource::Explicit(explicit));
        assert_eq!(manifest.registries[0].name, "minecraft:from_explicit");
    }

    #[test]
    fn test_explicit_missing_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.yaml");
        assert!(load_manifest_in(temp_dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_invalid_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        fs::write(&path, "registries: {this is: [not, a, list").unwrap();
        assert!(load_manifest_in(temp_dir.path(), Some(&path)).is_err());
    }
}
