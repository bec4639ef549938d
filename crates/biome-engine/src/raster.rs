//! CPU rasterization of surfaces through `resvg`.
//!
//! The window runtime presents these images; the export path encodes them as PNG.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::Surface;
use crate::svg::to_svg_document;

/// Rasterization parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterOptions {
    /// Output pixels per surface pixel (window scale factor, export supersampling).
    pub pixel_ratio: f32,
    /// Fill applied before drawing. `None` keeps a transparent background.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { pixel_ratio: 1.0, background: Some(Color::white()) }
    }
}

impl RasterOptions {
    pub fn pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    pub fn background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }
}

/// Reusable SVG rasterizer. Font discovery happens once, at construction.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    /// Creates a rasterizer with the system font database loaded.
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        log::debug!("rasterizer loaded {} font faces", options.fontdb.len());
        Self { options }
    }

    /// Rasterizes the surface's SVG serialization into a straight-alpha RGBA image.
    pub fn render_surface(&self, surface: &Surface, opts: RasterOptions) -> Result<RgbaImage> {
        self.render_svg(&to_svg_document(surface), surface.size(), opts)
    }

    /// Rasterizes an SVG document laid out at `size` surface pixels.
    pub fn render_svg(&self, svg: &str, size: Viewport, opts: RasterOptions) -> Result<RgbaImage> {
        let ratio = if opts.pixel_ratio.is_finite() && opts.pixel_ratio > 0.0 {
            opts.pixel_ratio
        } else {
            log::warn!("invalid pixel ratio {}; using 1", opts.pixel_ratio);
            1.0
        };

        let (w, h) = size.pixel_size(ratio);
        let mut pixmap = tiny_skia::Pixmap::new(w, h)
            .with_context(|| format!("failed to allocate {w}x{h} pixmap"))?;
        if let Some(bg) = opts.background {
            let (r, g, b, a) = bg.to_straight();
            pixmap.fill(tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::WHITE));
        }

        // usvg rejects a zero-sized root; such a surface has nothing visible anyway.
        if size.is_valid() {
            let tree =
                usvg::Tree::from_str(svg, &self.options).context("failed to parse surface SVG")?;
            resvg::render(&tree, tiny_skia::Transform::from_scale(ratio, ratio), &mut pixmap.as_mut());
        } else {
            log::warn!(
                "degenerate surface {}x{}; emitting background only",
                size.width,
                size.height
            );
        }

        to_rgba_image(&pixmap)
    }
}

fn to_rgba_image(pixmap: &tiny_skia::Pixmap) -> Result<RgbaImage> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .context("pixmap size does not match its pixel buffer")
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes `image` as PNG at `path`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write PNG to {}", path.display()))
}
