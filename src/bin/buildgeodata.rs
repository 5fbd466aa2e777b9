//! Converts a GeoJSON polygon dataset into a baked path table module.
//!
//! ```text
//! buildgeodata --input ne_110m_land.json --output src/data/land.rs --var LAND
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use globe::data::prepare::{extract_paths, parse_feature_collection, write_paths_code};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a prepared path table from GeoJSON
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input GeoJSON file
    #[arg(long)]
    input: PathBuf,

    /// Output Rust file
    #[arg(long)]
    output: PathBuf,

    /// Variable name
    #[arg(long)]
    var: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let collection = parse_feature_collection(&content)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!("loaded {} features", collection.features.len());

    let paths = extract_paths(&collection)?;
    info!("extracted {} paths", paths.len());

    let arguments = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut code = Vec::new();
    write_paths_code(&mut code, &args.var, &arguments, &paths)?;

    let mut w = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?,
    );
    w.write_all(&code)?;
    w.flush()?;
    Ok(())
}
