//! Zoomable climate biome chart.
//!
//! Biome regions and sample cities plotted by annual rainfall against average
//! temperature, with d3-style axes and a pan/zoom controller. Drawing goes to
//! a [`biome_engine::scene::Surface`], which can be serialized to SVG or
//! rasterized.

pub mod axis;
pub mod data;
pub mod export;
pub mod graph;
pub mod layout;
pub mod renderer;
pub mod scale;
pub mod zoom;

pub use graph::{ClimateBiomeGraph, GraphProps};
pub use renderer::ChartRenderer;
pub use zoom::{ZoomController, ZoomEvent, ZoomPhase};
