//! Paint model shared between the surface, the SVG writer and the rasterizer.
//!
//! Colors are stored premultiplied; serializers convert back to straight sRGB
//! hex when emitting attributes.

pub mod color;

pub use color::Color;
