use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rectangle draw payload. `opacity` multiplies the whole element.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Color,
    pub opacity: f32,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, fill: Color, opacity: f32) -> Self {
        Self { rect, fill, opacity }
    }
}

impl DrawList {
    /// Records a filled rectangle. The rect is kept as given, negative extents included.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, fill: Color, opacity: f32) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, fill, opacity)));
    }
}
