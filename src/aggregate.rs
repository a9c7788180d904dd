//! Registry aggregation: orchestrates scan → identify → load per registry.

use std::path::PathBuf;

use crate::config::RegistryDescriptor;
use crate::entry;
use crate::error::Result;
use crate::ident;
use crate::report::Reporter;
use crate::scan::{self, CandidateFile, RootScan};
use crate::snapshot::{Registry, RegistrySet};

/// Assemble the full snapshot document for `descriptors`, in order.
///
/// A descriptor whose root directory is missing is reported and omitted from
/// the output entirely (not present as an empty registry); processing
/// continues with the remaining descriptors. Any filesystem or parse failure
/// aborts the whole run with no partial document.
pub fn build_registry_set(
    descriptors: &[RegistryDescriptor],
    reporter: &mut dyn Reporter,
) -> Result<RegistrySet> {
    let mut set = RegistrySet::new();

    for descriptor in descriptors {
        match scan::scan_root(&descriptor.root)? {
            RootScan::Missing => {
                reporter.missing_root(&descriptor.name, &descriptor.root);
            }
            RootScan::Found(files) => {
                reporter.registry_started(&descriptor.name, &descriptor.root);
                let registry = assemble_registry(files, reporter)?;
                reporter.registry_finished(&descriptor.name, registry.len());
                set.insert(descriptor.name.clone(), registry);
            }
        }
    }

    Ok(set)
}

/// Derive identifiers, sort, and load entries in sorted order.
fn assemble_registry(files: Vec<CandidateFile>, reporter: &mut dyn Reporter) -> Result<Registry> {
    let mut pairs: Vec<(String, PathBuf)> = Vec::with_capacity(files.len());
    for file in files {
        let identifier = ident::identifier(&file.relative);
        reporter.entry_discovered(&identifier, &file.relative);
        pairs.push((identifier, file.path));
    }

    // Ascending byte order of the identifier is the output contract;
    // traversal order is not.
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut registry = Registry::with_capacity(pairs.len());
    for (identifier, path) in pairs {
        let value = entry::load_entry(&path)?;
        registry.insert(identifier, value);
    }

    Ok(registry)
}
