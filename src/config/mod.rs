//! Manifest configuration.
//!
//! The manifest is the ordered list of (root directory, registry name)
//! pairs the aggregator runs over. Resolution is first-found-wins:
//! 1. **Explicit** - `--manifest <path>` from the CLI
//! 2. **Project** - `./regsnap.yaml` in the working directory
//! 3. **Builtin** - the compiled-in default table

mod loader;
mod types;

pub use loader::{ManifestSource, PROJECT_MANIFEST, load_manifest, load_manifest_in};
pub use types::{Manifest, RegistryDescriptor};
