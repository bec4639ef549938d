//! wgpu device and swapchain for the viewer window.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit};
