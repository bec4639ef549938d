//! Climate biome chart studio.
//!
//! `view` opens an interactive window; `export` renders the chart to an SVG
//! or PNG file without a window.

mod viewer;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};

use biome_chart::export::export;
use biome_chart::{ClimateBiomeGraph, GraphProps};
use biome_engine::coords::{Transform, Vec2};
use biome_engine::logging::{init_logging, LoggingConfig};
use biome_engine::raster::RasterOptions;

/// Climate biome chart: biome regions and sample cities by rainfall and temperature.
#[derive(Parser)]
#[command(name = "biome-studio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter in `env_logger` syntax (overrides RUST_LOG).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chart in a window. Wheel zooms, drag pans, R resets, Escape quits.
    View {
        /// Initial width in logical pixels.
        #[arg(long, default_value = "800")]
        width: f32,

        /// Initial height in logical pixels.
        #[arg(long, default_value = "600")]
        height: f32,
    },

    /// Render the chart to a file; the format follows the extension (.svg or .png).
    Export {
        /// Output file.
        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, default_value = "800")]
        width: f32,

        #[arg(long, default_value = "600")]
        height: f32,

        /// View scale, clamped to 1..=8.
        #[arg(long, default_value = "1")]
        zoom: f32,

        /// Horizontal view translation in pixels.
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pan_x: f32,

        /// Vertical view translation in pixels.
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pan_y: f32,

        /// Output pixels per chart pixel (PNG only).
        #[arg(long, default_value = "1")]
        pixel_ratio: f32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = cli.log.clone() {
        logging = logging.filter(filter);
    }
    init_logging(logging);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::View { width, height } => {
            ensure!(width > 0.0 && height > 0.0, "window size must be positive, got {width}x{height}");
            viewer::run(GraphProps::new(width, height))
        }

        Commands::Export { out, width, height, zoom, pan_x, pan_y, pixel_ratio } => {
            ensure!(width.is_finite() && height.is_finite(), "chart size must be finite");
            ensure!(pixel_ratio.is_finite() && pixel_ratio > 0.0, "pixel ratio must be positive");

            let mut graph = ClimateBiomeGraph::new(GraphProps::new(width, height));
            graph.mount();
            if let Some(controller) = graph.zoom_mut() {
                controller.transform_to(Transform::new(Vec2::new(pan_x, pan_y), zoom));
            }

            let options = RasterOptions::default().pixel_ratio(pixel_ratio);
            export(&graph, &out, options)?;
            log::info!("view transform: {}", graph.view_transform());
            Ok(())
        }
    }
}
