//! regsnap
//!
//! Aggregates per-entry JSON data files scattered across directory trees
//! into one canonical registry snapshot document.

use std::fs::OpenOptions;

use anyhow::Result;
use clap::Parser;
use regsnap::aggregate::build_registry_set;
use regsnap::cli::build::BuildArgs;
use regsnap::cli::{Cli, Command};
use regsnap::config::{self, Manifest};
use regsnap::report::LogReporter;
use regsnap::snapshot::write_artifact;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new().create(true).append(true).open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let (mut manifest, source) = config::load_manifest(cli.manifest.as_deref())?;
    info!(source = %source, registries = manifest.len(), "Manifest loaded");

    if let Some(ref base) = cli.data_root {
        manifest = manifest.resolved_against(base);
    }

    match cli.command {
        Some(Command::List) => run_list(&manifest),
        Some(Command::Build(args)) => run_build(&manifest, args),
        None => run_build(&manifest, BuildArgs::default()),
    }
}

/// Run the build command
fn run_build(manifest: &Manifest, args: BuildArgs) -> Result<()> {
    let mut reporter = LogReporter;
    let set = build_registry_set(&manifest.registries, &mut reporter)?;

    if args.dry_run {
        println!("Dry run results:");
        for (name, registry) in set.iter() {
            println!("  {}: {} entries", name, registry.len());
        }
        println!(
            "Total: {} registries, {} entries (nothing written)",
            set.len(),
            set.entry_count()
        );
        return Ok(());
    }

    // The whole document is serialized before the sink is touched, so a
    // failed run never leaves a partial artifact behind.
    let json = set.to_json_pretty()?;
    let should_compress = args.should_compress(Some(json.len() as u64));
    write_artifact(&args.output, &json, should_compress)?;

    if should_compress {
        eprintln!("Wrote {} (gzipped)", args.output.display());
    } else {
        eprintln!("Wrote {}", args.output.display());
    }
    info!(
        registries = set.len(),
        entries = set.entry_count(),
        output = %args.output.display(),
        "Snapshot complete"
    );

    Ok(())
}

/// Run the list command
fn run_list(manifest: &Manifest) -> Result<()> {
    println!("Configured registries ({}):", manifest.len());
    for descriptor in &manifest.registries {
        let status = if descriptor.root.is_dir() {
            "present"
        } else {
            "missing"
        };
        println!(
            "  {} <- {} [{}]",
            descriptor.name,
            descriptor.root.display(),
            status
        );
    }
    Ok(())
}
