//! Geometry shared by the surface, the SVG writer and the window runtime.
//!
//! Canonical space:
//! - pixels of the drawing surface
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
