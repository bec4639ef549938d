//! Biome engine crate.
//!
//! Geometry, colour, a retained drawing surface with SVG output and CPU
//! rasterization, plus the winit/wgpu runtime that presents it.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;
pub mod svg;
pub mod window;
