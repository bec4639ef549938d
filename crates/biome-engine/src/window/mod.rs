//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single chart window, and wires them to
//! the GPU layer.

mod runtime;
mod translate;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
