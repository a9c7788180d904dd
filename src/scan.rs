//! Discovery of entry files beneath a registry root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SnapshotError};
use crate::ident;

/// A discovered entry file beneath a registry root.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    /// Path to the file on disk.
    pub path: PathBuf,
    /// Path relative to the registry root, `/`-separated.
    pub relative: String,
}

/// Outcome of scanning a configured registry root.
#[derive(Debug)]
pub enum RootScan {
    /// The root does not exist or is not a directory. The caller decides
    /// whether to skip or abort.
    Missing,
    /// Every entry file found beneath the root, in filesystem order.
    Found(Vec<CandidateFile>),
}

/// Recursively collect every entry file beneath `root`, at any depth.
///
/// Non-matching files are traversed past but not emitted. Traversal order is
/// filesystem-dependent; callers sort by identifier before the order becomes
/// observable.
pub fn scan_root(root: &Path) -> Result<RootScan> {
    if !root.is_dir() {
        return Ok(RootScan::Missing);
    }

    let mut files = Vec::new();
    walk(root, root, &mut files)?;
    Ok(RootScan::Found(files))
}

fn walk(dir: &Path, root: &Path, files: &mut Vec<CandidateFile>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| SnapshotError::io(dir, e))? {
        let entry = entry.map_err(|e| SnapshotError::io(dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            walk(&path, root, files)?;
        } else if path.is_file()
            && path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().ends_with(ident::ENTRY_SUFFIX))
        {
            let relative = ident::relative_path(root, &path);
            files.push(CandidateFile { path, relative });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist");
        assert!(matches!(scan_root(&missing).unwrap(), RootScan::Missing));
    }

    #[test]
    fn test_scan_root_that_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir.json");
        fs::write(&file, "{}").unwrap();
        assert!(matches!(scan_root(&file).unwrap(), RootScan::Missing));
    }

    #[test]
    fn test_scan_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        match scan_root(temp_dir.path()).unwrap() {
            RootScan::Found(files) => assert!(files.is_empty()),
            RootScan::Missing => panic!("existing directory reported missing"),
        }
    }

    #[test]
    fn test_scan_finds_nested_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("black.json"), "{}").unwrap();
        fs::create_dir_all(root.join("warm/deep")).unwrap();
        fs::write(root.join("warm/deep/red.json"), "{}").unwrap();

        let RootScan::Found(files) = scan_root(root).unwrap() else {
            panic!("root reported missing");
        };

        let mut relatives: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
        relatives.sort();
        assert_eq!(relatives, vec!["black.json", "warm/deep/red.json"]);
    }

    #[test]
    fn test_scan_ignores_other_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("entry.json"), "{}").unwrap();
        fs::write(root.join("notes.txt"), "ignore me").unwrap();
        fs::write(root.join("README.md"), "# ignore").unwrap();

        let RootScan::Found(files) = scan_root(root).unwrap() else {
            panic!("root reported missing");
        };
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, "entry.json");
    }
}
