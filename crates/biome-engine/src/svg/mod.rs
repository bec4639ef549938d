//! SVG serialization of a [`Surface`](crate::scene::Surface).
//!
//! Output is a standalone document: one `<g>` per group, one element per
//! draw command, painted in z/insertion order.

mod writer;

pub use writer::{escape_text, to_svg_document};
