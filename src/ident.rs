//! Identifier derivation from entry file locations.
//!
//! An identifier names one entry within its registry and is computed purely
//! from where the file sits relative to the registry root:
//! `<root>/worldgen/biome/plains.json` becomes
//! `minecraft:worldgen/biome/plains` when `<root>` is the registry root.

use std::path::Path;

/// Namespace prefix applied to every derived identifier.
pub const NAMESPACE: &str = "minecraft";

/// Suffix that marks a file as an entry file.
pub const ENTRY_SUFFIX: &str = ".json";

/// Path of `path` relative to `root`, with separators normalized to `/`.
///
/// Identifiers must read the same regardless of the source filesystem's
/// separator convention.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

/// Canonical identifier for an entry file given its normalized relative path.
///
/// Strips the entry suffix and prepends the namespace. Any relative path is
/// a valid identifier suffix; this cannot fail.
pub fn identifier(relative: &str) -> String {
    let stem = relative.strip_suffix(ENTRY_SUFFIX).unwrap_or(relative);
    format!("{}:{}", NAMESPACE, stem)
}
