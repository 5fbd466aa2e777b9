use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use globe::{color, Color, GeoPoint, Globe, StyleOption};
use simd_json::prelude::*;
use simd_json::OwnedValue;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render geographic data on a 3D wireframe globe
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output PNG file
    #[arg(long, default_value = "globe.png")]
    output: PathBuf,

    /// Output image side length in pixels
    #[arg(long, default_value_t = 500)]
    side: u32,

    /// Graticule interval in degrees (0 disables the graticule)
    #[arg(long, default_value_t = 10.0)]
    graticule: f64,

    /// Draw land boundaries
    #[arg(long)]
    land: bool,

    /// Draw country boundaries
    #[arg(long)]
    countries: bool,

    /// Center the view on LAT,LNG
    #[arg(long, value_parser = parse_coords::<2>, allow_hyphen_values = true)]
    center: Option<[f64; 2]>,

    /// Great circle line LAT1,LNG1,LAT2,LNG2 (repeatable)
    #[arg(long = "line", value_parser = parse_coords::<4>, allow_hyphen_values = true)]
    lines: Vec<[f64; 4]>,

    /// Rectangle MINLAT,MINLNG,MAXLAT,MAXLNG (repeatable)
    #[arg(long = "rect", value_parser = parse_coords::<4>, allow_hyphen_values = true)]
    rects: Vec<[f64; 4]>,

    /// JSON array of {"lat", "lng"} or {"latitude", "longitude"} records to draw as dots
    #[arg(long)]
    dots: Option<PathBuf>,

    /// Dot radius in globe units
    #[arg(long, default_value_t = 0.02)]
    dot_radius: f64,

    /// Color for dots, lines and rects (#rrggbb or #rrggbbaa)
    #[arg(long)]
    color: Option<Color>,

    /// Print a Braille preview to the terminal instead of writing a PNG
    #[arg(long)]
    preview: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let globe = build(&args)?;

    if args.preview {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        // Leave a row for the shell prompt
        let rows = rows.saturating_sub(1).max(1);
        println!("{}", globe.render_preview(cols as usize, rows as usize));
        return Ok(());
    }

    globe
        .save_png(&args.output, args.side)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(output = %args.output.display(), side = args.side, "wrote globe image");
    Ok(())
}

/// Draw everything requested on the command line.
fn build(args: &Args) -> Result<Globe> {
    let mut globe = Globe::new();
    let overrides: Vec<StyleOption> = args.color.map(color).into_iter().collect();

    if args.graticule > 0.0 {
        globe.draw_graticule(args.graticule, &[]);
    }
    if args.land {
        globe.draw_land_boundaries(&[]);
    }
    if args.countries {
        globe.draw_country_boundaries(&[]);
    }

    if let Some(path) = &args.dots {
        let dots = load_dots(path)?;
        info!(count = dots.len(), path = %path.display(), "loaded dots");
        for dot in &dots {
            globe.draw_dot(dot.lat, dot.lng, args.dot_radius, &overrides);
        }
    }

    for &[lat1, lng1, lat2, lng2] in &args.lines {
        globe.draw_line(lat1, lng1, lat2, lng2, &overrides);
    }
    for &[min_lat, min_lng, max_lat, max_lng] in &args.rects {
        globe.draw_rect(min_lat, min_lng, max_lat, max_lng, &overrides);
    }

    if let Some([lat, lng]) = args.center {
        globe.center_on(lat, lng);
    }

    Ok(globe)
}

/// Parse `N` comma separated numbers.
fn parse_coords<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected {N} comma-separated numbers, got {}", v.len()))
}

/// Load dot positions from a JSON array of records.
///
/// Coordinates may be numbers or numeric strings. Records without a usable
/// latitude and longitude are skipped.
fn load_dots(path: &Path) -> Result<Vec<GeoPoint>> {
    let mut bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value = simd_json::to_owned_value(&mut bytes)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    let records = value
        .as_array()
        .with_context(|| format!("{} must hold a JSON array", path.display()))?;

    Ok(records
        .iter()
        .filter_map(|record| {
            let lat = coordinate(record, &["lat", "latitude"])?;
            let lng = coordinate(record, &["lng", "longitude"])?;
            Some(GeoPoint::new(lat, lng))
        })
        .collect())
}

fn coordinate(record: &OwnedValue, keys: &[&str]) -> Option<f64> {
    let value = keys.iter().find_map(|k| record.get(*k))?;
    value
        .cast_f64()
        .or_else(|| value.as_str()?.trim().parse().ok())
}
