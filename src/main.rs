//! filetally — directory inventory with aggregated folder sizes.
//!
//! Thin binary entry point: argument parsing, logging init, and result
//! rendering. All scanning logic lives in the `filetally-core` crate.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use filetally_core::model::{format_count, format_size, Entry};
use filetally_core::scanner::TreeScanner;

#[derive(Parser)]
#[command(
    name = "filetally",
    version,
    about = "Inventory a directory tree with content types and aggregated folder sizes"
)]
struct Cli {
    /// Directory to inventory.
    root: PathBuf,

    /// Depth limit in path segments from the root (must be at least 1).
    /// Files deeper than the limit are folded into their nearest listed
    /// folder's aggregate.
    #[arg(short, long, default_value_t = 1)]
    depth: usize,

    /// Also write the entry list as JSON to the given file.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Also write the entry list as CSV to the given file.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Traversal warnings (unreadable
    // entries) land on stderr without disturbing the table on stdout.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let scanner = TreeScanner::default();
    let entries = scanner
        .scan(&cli.root, cli.depth)
        .with_context(|| format!("failed to scan {}", cli.root.display()))?;

    print_table(&entries);

    if let Some(path) = &cli.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &entries)
            .with_context(|| format!("failed to write JSON to {}", path.display()))?;
        tracing::info!("wrote {} entries to {}", entries.len(), path.display());
    }

    if let Some(path) = &cli.csv {
        write_csv(path, &entries)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        tracing::info!("wrote {} entries to {}", entries.len(), path.display());
    }

    Ok(())
}

fn print_table(entries: &[Entry]) {
    println!(
        "{:<40} {:<12} {:<44} {:>12}",
        "Name", "Category", "Type", "Size"
    );
    for entry in entries {
        println!(
            "{:<40} {:<12} {:<44} {:>12}",
            entry.name,
            entry.category.label(),
            entry.content_type,
            format_size(entry.size_bytes)
        );
    }

    let total: u64 = entries.iter().map(|e| e.size_bytes).sum();
    println!();
    println!(
        "{} entries, {} total",
        format_count(entries.len() as u64),
        format_size(total)
    );
}

fn write_csv(path: &Path, entries: &[Entry]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
