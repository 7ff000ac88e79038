//! # Arbalest CLI
//!
//! Thin host around the generation engine: loads a content catalog and a
//! generation configuration from JSON, runs generation once, and writes
//! the updated catalog back out. Stands in for the game host, which
//! invokes the engine from its catalog-loaded callback.

use arbalest::{generation, ArbalestResult, Catalog, GenerationConfig};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Command line arguments for the Arbalest generator.
#[derive(Parser, Debug)]
#[command(name = "arbalest")]
#[command(about = "Generates enchanted weapon variants and their crafting recipes")]
#[command(version)]
struct Args {
    /// Path to the content catalog JSON file
    #[arg(short, long)]
    catalog: PathBuf,

    /// Path to the generation config JSON file (defaults to the built-in
    /// crossbow crafting tables)
    #[arg(short = 'g', long)]
    config: Option<PathBuf>,

    /// Write the updated catalog to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ArbalestResult<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    info!("Starting Arbalest v{}", arbalest::VERSION);

    let mut catalog: Catalog = serde_json::from_str(&fs::read_to_string(&args.catalog)?)?;
    info!(
        "Loaded catalog: {} items, {} recipes, {} merchants",
        catalog.item_count(),
        catalog.recipe_count(),
        catalog.merchant_count()
    );

    let config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => GenerationConfig::default(),
    };

    let summary = generation::run(&mut catalog, &config)?;
    println!(
        "Generated {} items, {} recipes, {} manuals ({} vendor stock entries)",
        summary.items, summary.recipes, summary.manuals, summary.stock_entries
    );

    if let Some(output) = &args.output {
        fs::write(output, serde_json::to_string_pretty(&catalog)?)?;
        info!("Wrote updated catalog to {}", output.display());
    }

    Ok(())
}
