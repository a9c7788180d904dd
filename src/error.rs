//! Error types for the snapshot pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a snapshot run.
///
/// A missing registry root is deliberately not represented here: it is the
/// one recoverable condition and is modeled as `RootScan::Missing`, so the
/// aggregator skips that registry and keeps going instead of unwinding.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Filesystem access failed during traversal or read.
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry file exists but its content is not valid JSON.
    #[error("malformed entry {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SnapshotError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;
