//! Progress reporting seam for the aggregation pipeline.
//!
//! The aggregator reports through this trait instead of printing, so the
//! core never depends on a sink for control flow and tests run silent.

use std::path::Path;

use tracing::{debug, info, warn};

/// Receives progress and warning diagnostics from the aggregator.
///
/// Every method has an empty default body: implementors override only the
/// events they care about.
pub trait Reporter {
    /// A registry root is about to be scanned.
    fn registry_started(&mut self, _name: &str, _root: &Path) {}

    /// A candidate file was discovered and assigned an identifier.
    fn entry_discovered(&mut self, _identifier: &str, _relative: &str) {}

    /// All entries of a registry were loaded.
    fn registry_finished(&mut self, _name: &str, _count: usize) {}

    /// The configured root does not exist; the registry is being skipped.
    fn missing_root(&mut self, _name: &str, _root: &Path) {}
}

/// Reporter that forwards progress to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn registry_started(&mut self, name: &str, root: &Path) {
        info!(registry = %name, root = %root.display(), "Processing registry");
    }

    fn entry_discovered(&mut self, identifier: &str, relative: &str) {
        debug!(identifier = %identifier, path = %relative, "New entry found");
    }

    fn registry_finished(&mut self, name: &str, count: usize) {
        info!(registry = %name, entries = count, "Registry assembled");
    }

    fn missing_root(&mut self, name: &str, root: &Path) {
        warn!(
            registry = %name,
            root = %root.display(),
            "Registry root does not exist, skipping"
        );
    }
}

/// Reporter that discards every event.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}
