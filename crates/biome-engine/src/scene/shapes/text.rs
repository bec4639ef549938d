use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Horizontal alignment of a text run relative to its anchor point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Single-line text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Anchor point in group space; rotation pivots around it.
    pub origin: Vec2,
    /// Font size in pixels.
    pub size: f32,
    pub fill: Color,
    pub anchor: TextAnchor,
    /// Vertical shift of the baseline, in em.
    pub baseline_shift: f32,
    /// Clockwise rotation in degrees.
    pub rotation: f32,
}

impl TextCmd {
    pub fn new(text: impl Into<String>, origin: Vec2, size: f32, fill: Color) -> Self {
        Self {
            text: text.into(),
            origin,
            size,
            fill,
            anchor: TextAnchor::Start,
            baseline_shift: 0.0,
            rotation: 0.0,
        }
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline_shift(mut self, em: f32) -> Self {
        self.baseline_shift = em;
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

impl DrawList {
    /// Records a text command.
    #[inline]
    pub fn push_text(&mut self, z: ZIndex, text: TextCmd) {
        self.push(z, DrawCmd::Text(text));
    }
}
