mod circle;
mod line;
mod rect;
mod text;

pub use circle::CircleCmd;
pub use line::{LineCmd, PathCmd};
pub use rect::RectCmd;
pub use text::{TextAnchor, TextCmd};

use crate::paint::Color;

/// Stroke drawn along a line, path or shape outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
