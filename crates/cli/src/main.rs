//! topotile CLI - tile grid addressing and capture areas

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use topotile_algorithms::capture_area::{buffer_distance_for_gsd, generate_capture_area};
use topotile_algorithms::tile_index::{
    check_tile_origins, get_bounds_from_name, get_mapsheet_offset, get_tile_name, GridSize,
};
use topotile_core::io::{read_footprints, write_feature};
use topotile_core::Point;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "topotile")]
#[command(author, version, about = "Tile grid addressing and capture areas", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the upper-left corner of a 1:50k mapsheet
    Mapsheet {
        /// Mapsheet code, e.g. CG10
        code: String,
    },
    /// Print the bounds and crop window of tiles
    Bounds {
        /// Tile names, e.g. CG10_500_080037
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the name of the tile whose upper-left corner is at (x, y)
    TileName {
        /// Easting in metres
        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,
        /// Northing in metres
        #[arg(short, long, allow_hyphen_values = true)]
        y: f64,
        /// Grid size: 50000, 10000, 5000, 2000, 1000 or 500
        #[arg(short, long)]
        grid_size: GridSize,
    },
    /// Check that raster origins match their file names
    CheckOrigins {
        /// Grid size the files are named at
        #[arg(short, long)]
        grid_size: GridSize,
        /// JSON manifest: [{"path": "...", "origin": [x, y]}, ...]
        manifest: PathBuf,
    },
    /// Merge footprints into a capture area GeoJSON document
    CaptureArea {
        /// Ground sample distance of the imagery, in metres
        #[arg(long)]
        gsd: f64,
        /// Output GeoJSON file
        #[arg(short, long)]
        output: PathBuf,
        /// GeoJSON footprint files
        #[arg(required = true)]
        footprints: Vec<PathBuf>,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the log subscriber")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    path: PathBuf,
    origin: [f64; 2],
}

fn read_manifest(path: &Path) -> Result<Vec<(PathBuf, Point)>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    parse_manifest(&text).with_context(|| format!("Invalid manifest {}", path.display()))
}

fn parse_manifest(text: &str) -> Result<Vec<(PathBuf, Point)>> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(text)?;
    Ok(entries
        .into_iter()
        .map(|e| (e.path, Point::new(e.origin[0], e.origin[1])))
        .collect())
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Mapsheet { code } => {
            let origin = get_mapsheet_offset(&code)?;
            println!("{code}: {origin}");
        }

        Commands::Bounds { names } => {
            for name in &names {
                let bounds = get_bounds_from_name(name)?;
                let (min_x, min_y, max_x, max_y) = bounds.crop_window();
                println!("{name}: {bounds}");
                println!("  Crop window: {min_x} {min_y} {max_x} {max_y}");
            }
        }

        Commands::TileName { x, y, grid_size } => {
            let name = get_tile_name(Point::new(x, y), grid_size)?;
            println!("{name}");
        }

        Commands::CheckOrigins {
            grid_size,
            manifest,
        } => {
            let entries = read_manifest(&manifest)?;
            let start = Instant::now();
            let checks = check_tile_origins(&entries, grid_size);

            let problems: Vec<_> = checks.iter().filter(|c| !c.is_aligned()).collect();
            for check in &problems {
                println!("{check}");
            }
            println!(
                "{} of {} files aligned ({:.2?})",
                checks.len() - problems.len(),
                checks.len(),
                start.elapsed()
            );
            if !problems.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::CaptureArea {
            gsd,
            output,
            footprints,
        } => {
            let start = Instant::now();
            let pb = spinner("Reading footprints...");
            let mut polygons = Vec::new();
            for path in &footprints {
                let read = read_footprints(path)
                    .with_context(|| format!("Failed to read footprints {}", path.display()))?;
                debug!("{}: {} polygons", path.display(), read.len());
                polygons.extend(read);
            }
            pb.finish_and_clear();

            let buffer_distance = buffer_distance_for_gsd(gsd)?;
            info!(
                "Merging {} polygons from {} files",
                polygons.len(),
                footprints.len()
            );

            let pb = spinner("Merging footprints...");
            let feature = generate_capture_area(&polygons, gsd)?;
            pb.finish_and_clear();

            let asset = write_feature(&feature, &output)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Capture area saved to: {}", output.display());
            println!("  Polygons: {}", polygons.len());
            println!("  Buffer distance: {buffer_distance}");
            println!("  file:size: {}", asset.size);
            println!("  file:checksum: {}", asset.checksum);
            println!("  Processing time: {:.2?}", start.elapsed());
        }
    }

    Ok(ExitCode::SUCCESS)
}
