//! Interactive window: presents the rasterized chart and feeds it input.

use anyhow::Result;
use biome_chart::{ClimateBiomeGraph, GraphProps};
use biome_engine::core::{App, AppControl, FrameCtx};
use biome_engine::device::GpuInit;
use biome_engine::input::Key;
use biome_engine::paint::Color;
use biome_engine::raster::{RasterOptions, Rasterizer};
use biome_engine::render::ImageRenderer;
use biome_engine::window::{Runtime, RuntimeConfig};

/// Opens the chart window and blocks until it is closed.
pub fn run(props: GraphProps) -> Result<()> {
    let config = RuntimeConfig::default()
        .title("Climate Biomes")
        .initial_size(props.width as f64, props.height as f64);

    log::info!("opening viewer at {}x{}", props.width, props.height);
    Runtime::run(config, GpuInit::default(), Viewer::new(props))
}

struct Viewer {
    graph: ClimateBiomeGraph,
    rasterizer: Rasterizer,
    image: ImageRenderer,
    /// Graph revision and pixel size of the uploaded image.
    presented: Option<(u64, (u32, u32))>,
}

impl Viewer {
    fn new(props: GraphProps) -> Self {
        let mut graph = ClimateBiomeGraph::new(props);
        graph.mount();
        Self {
            graph,
            rasterizer: Rasterizer::new(),
            image: ImageRenderer::new(),
            presented: None,
        }
    }
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let keys = &ctx.input_frame.keys_pressed;
        if keys.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        let size = ctx.window.logical_size();
        if size.is_valid() {
            self.graph.set_props(GraphProps::new(size.width, size.height));
        }

        if keys.contains(&Key::R) || keys.contains(&Key::Home) {
            if let Some(zoom) = self.graph.zoom_mut() {
                zoom.reset();
            }
        }

        for event in &ctx.input_frame.events {
            self.graph.handle_input(event);
        }

        let options = RasterOptions::default().pixel_ratio(ctx.window.scale_factor());
        let pixels = self.graph.props().viewport().pixel_size(options.pixel_ratio);
        let current = (self.graph.revision(), pixels);

        let raster = if self.presented != Some(current) {
            match self.rasterizer.render_surface(&self.graph.surface(), options) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("chart rasterization failed: {e:#}");
                    None
                }
            }
        } else {
            None
        };
        if raster.is_some() {
            self.presented = Some(current);
        }

        let renderer = &mut self.image;
        ctx.render(Color::white(), |rctx, target| {
            if let Some(image) = &raster {
                renderer.upload(rctx, image.width(), image.height(), image.as_raw());
            }
            renderer.render(rctx, target);
        })
    }
}
