//! GPU presentation.
//!
//! Charts are rasterized on the CPU (`raster`); the GPU side only uploads the
//! finished image and stretches it over the swapchain texture.

mod ctx;
mod image;

pub use ctx::{RenderCtx, RenderTarget};
pub use image::ImageRenderer;
