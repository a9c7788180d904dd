//! Loading entry file contents.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SnapshotError};

/// Read one entry file and parse it as a structured JSON value.
///
/// The value is opaque to the rest of the pipeline: objects, arrays and
/// scalars are all acceptable. Malformed content is fatal to the whole run;
/// no partial or best-effort parsing is attempted.
pub fn load_entry(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| SnapshotError::parse(path, e))
}
