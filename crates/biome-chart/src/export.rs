//! Writing a mounted graph to disk as SVG or PNG.

use std::path::Path;

use anyhow::{bail, Context, Result};
use biome_engine::raster::{save_png, RasterOptions, Rasterizer};

use crate::graph::ClimateBiomeGraph;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            Some(other) => bail!("unsupported export format `.{other}` (expected .svg or .png)"),
            None => bail!("cannot infer export format from {}", path.display()),
        }
    }
}

pub fn write_svg(graph: &ClimateBiomeGraph, path: &Path) -> Result<()> {
    std::fs::write(path, graph.to_svg())
        .with_context(|| format!("failed to write SVG to {}", path.display()))
}

pub fn write_png(graph: &ClimateBiomeGraph, path: &Path, options: RasterOptions) -> Result<()> {
    let image = Rasterizer::new()
        .render_surface(&graph.surface(), options)
        .context("failed to rasterize chart")?;
    save_png(&image, path)
}

/// Writes `graph` to `path` in the format its extension names.
pub fn export(graph: &ClimateBiomeGraph, path: &Path, options: RasterOptions) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    match format {
        ExportFormat::Svg => write_svg(graph, path)?,
        ExportFormat::Png => write_png(graph, path, options)?,
    }
    log::info!("exported {:?} to {}", format, path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphProps;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("biome-chart-{}-{name}", std::process::id()))
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.SVG")).unwrap(), ExportFormat::Svg);
        assert_eq!(ExportFormat::from_path(Path::new("dir/b.png")).unwrap(), ExportFormat::Png);
        assert!(ExportFormat::from_path(Path::new("c.jpg")).is_err());
        assert!(ExportFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn svg_export_writes_document() {
        let mut graph = ClimateBiomeGraph::new(GraphProps::default());
        graph.mount();
        let path = scratch("chart.svg");

        export(&graph, &path, RasterOptions::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(text, graph.to_svg());
        assert!(text.contains(r#"class="city""#));
    }

    #[test]
    fn rasterized_chart_shows_cairo_in_red() {
        let mut graph = ClimateBiomeGraph::new(GraphProps::default());
        graph.mount();

        let image = Rasterizer::new()
            .render_surface(&graph.surface(), RasterOptions::default())
            .unwrap();
        assert_eq!(image.dimensions(), (800, 600));
        // Cairo: margin (40, 20) + scaled (100 mm, 25 °C) ≈ (64.7, 226.3).
        assert_eq!(image.get_pixel(64, 226).0, [255, 0, 0, 255]);
        // Top-right corner stays background.
        assert_eq!(image.get_pixel(799, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn png_export_round_trips_dimensions() {
        let mut graph = ClimateBiomeGraph::new(GraphProps::new(200.0, 150.0));
        graph.mount();
        let path = scratch("chart.png");

        export(&graph, &path, RasterOptions::default().pixel_ratio(2.0)).unwrap();
        let decoded = image::open(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.unwrap().to_rgba8().dimensions(), (400, 300));
    }

    #[test]
    fn zero_sized_chart_exports_a_blank_png() {
        let mut graph = ClimateBiomeGraph::new(GraphProps::new(0.0, 0.0));
        graph.mount();
        let path = scratch("empty.png");

        let written = export(&graph, &path, RasterOptions::default());
        let decoded = image::open(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(written.unwrap(), ExportFormat::Png);
        let decoded = decoded.unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (1, 1));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
