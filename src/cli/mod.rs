//! CLI command definitions for regsnap
//!
//! This module defines the CLI structure using clap's derive macros. The
//! main entry point is the `Cli` struct which contains subcommands.

pub mod build;

use std::path::PathBuf;

use build::BuildArgs;
use clap::{Parser, Subcommand};

/// Registry snapshot aggregation tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a manifest file (default: ./regsnap.yaml, else built-ins)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Base directory registry roots are resolved against
    #[arg(short, long, global = true)]
    pub data_root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the snapshot and write the output artifact (default)
    Build(BuildArgs),

    /// List configured registries without reading any entries
    List,
}
