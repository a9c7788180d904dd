//! Build subcommand for the regsnap CLI
//!
//! Assembles the registry snapshot from the manifest and writes it as one
//! structured JSON artifact that downstream consumers read instead of
//! walking the data tree themselves.

use std::path::PathBuf;

use clap::Args;

/// Default output artifact path.
pub const DEFAULT_OUTPUT: &str = "registry.json";

/// Arguments for the build subcommand
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output file path (fully overwritten on each run)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Force gzip compression (auto-detected from .gz extension otherwise)
    #[arg(long)]
    pub gzip: bool,

    /// Automatically compress if output exceeds this size
    ///
    /// Accepts human-readable sizes: 100KB, 1MB, etc. If the serialized
    /// document exceeds this threshold, the output is gzip compressed.
    #[arg(long, value_name = "SIZE")]
    pub compress_threshold: Option<String>,

    /// Assemble and report counts without writing the artifact
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            gzip: false,
            compress_threshold: None,
            dry_run: false,
        }
    }
}

impl BuildArgs {
    /// Parse the compress threshold into bytes
    pub fn compress_threshold_bytes(&self) -> Option<u64> {
        self.compress_threshold.as_ref().and_then(|s| parse_size(s))
    }

    /// Determine if output should be compressed based on args and filename
    pub fn should_compress(&self, output_size: Option<u64>) -> bool {
        // Explicit --gzip flag always wins
        if self.gzip {
            return true;
        }

        if self.output.extension().is_some_and(|ext| ext == "gz") {
            return true;
        }

        if let (Some(threshold), Some(size)) = (self.compress_threshold_bytes(), output_size) {
            return size > threshold;
        }

        false
    }
}

/// Parse a human-readable size string into bytes
///
/// Supports: B, KB, MB, GB (case-insensitive)
fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();

    const UNITS: [(&str, u64); 4] = [
        ("GB", 1024 * 1024 * 1024),
        ("MB", 1024 * 1024),
        ("KB", 1024),
        ("B", 1),
    ];
    for (suffix, scale) in UNITS {
        if let Some(num) = s.strip_suffix(suffix) {
            return num.trim().parse::<u64>().ok().map(|n| n * scale);
        }
    }

    // Plain number of bytes
    s.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("100"), Some(100));
        assert_eq!(parse_size("100B"), Some(100));
        assert_eq!(parse_size("100KB"), Some(100 * 1024));
        assert_eq!(parse_size("100kb"), Some(100 * 1024));
        assert_eq!(parse_size("1MB"), Some(1024 * 1024));
        assert_eq!(parse_size("1GB"), Some(1024 * 1024 * 1024));
        assert_eq!(parse_size("invalid"), None);
    }

    #[test]
    fn test_should_compress_gzip_flag() {
        let args = BuildArgs {
            gzip: true,
            ..Default::default()
        };
        assert!(args.should_compress(None));
    }

    #[test]
    fn test_should_compress_gz_extension() {
        let args = BuildArgs {
            output: PathBuf::from("registry.json.gz"),
            ..Default::default()
        };
        assert!(args.should_compress(None));
    }

    #[test]
    fn test_should_compress_threshold() {
        let args = BuildArgs {
            compress_threshold: Some("100KB".to_string()),
            ..Default::default()
        };
        assert!(!args.should_compress(Some(50 * 1024)));
        assert!(args.should_compress(Some(150 * 1024)));
    }

    #[test]
    fn test_plain_json_not_compressed() {
        let args = BuildArgs::default();
        assert!(!args.should_compress(Some(10 * 1024 * 1024)));
    }
}
