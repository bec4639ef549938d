//! Axis guides in the style of `d3-axis`.
//!
//! An axis draws a domain path with outer ticks at both ends, one short tick
//! line per tick value and a label next to each tick. Everything is emitted
//! into the caller's draw list, shifted by `origin` (the `translate` d3 puts
//! on the axis group).

use biome_engine::coords::Vec2;
use biome_engine::paint::Color;
use biome_engine::scene::{DrawList, Stroke, TextAnchor, TextCmd, ZIndex};

use crate::scale::LinearScale;

pub const TICK_SIZE: f32 = 6.0;
pub const TICK_PADDING: f32 = 3.0;
pub const FONT_SIZE: f32 = 10.0;
/// Crisp 1px lines on the pixel grid.
const OFFSET: f32 = 0.5;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axis {
    orient: Orient,
    scale: LinearScale,
    tick_count: usize,
    tick_size_inner: f32,
    tick_size_outer: f32,
    tick_padding: f32,
}

impl Axis {
    pub fn bottom(scale: LinearScale) -> Self {
        Self::new(Orient::Bottom, scale)
    }

    pub fn left(scale: LinearScale) -> Self {
        Self::new(Orient::Left, scale)
    }

    fn new(orient: Orient, scale: LinearScale) -> Self {
        Self {
            orient,
            scale,
            tick_count: 10,
            tick_size_inner: TICK_SIZE,
            tick_size_outer: TICK_SIZE,
            tick_padding: TICK_PADDING,
        }
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn orient(&self) -> Orient {
        self.orient
    }

    /// `+1` for axes drawn below/right of their line, `-1` for above/left.
    fn k(&self) -> f32 {
        match self.orient {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }

    /// Maps `(along, across)` axis-local coordinates to group space.
    fn point(&self, origin: Vec2, along: f32, across: f32) -> Vec2 {
        match self.orient {
            Orient::Bottom => origin + Vec2::new(along, across),
            Orient::Left => origin + Vec2::new(across, along),
        }
    }

    /// Appends the axis to `list`. Returns the number of ticks drawn.
    pub fn draw(&self, list: &mut DrawList, z: ZIndex, origin: Vec2) -> usize {
        let k = self.k();
        let stroke = Stroke::new(1.0, Color::black());
        let [r0, r1] = self.scale.range();

        let outer = k * self.tick_size_outer;
        let domain = vec![
            self.point(origin, r0 + OFFSET, outer),
            self.point(origin, r0 + OFFSET, OFFSET),
            self.point(origin, r1 + OFFSET, OFFSET),
            self.point(origin, r1 + OFFSET, outer),
        ];
        list.push_path(z, domain, stroke);

        let (anchor, dy) = match self.orient {
            Orient::Bottom => (TextAnchor::Middle, 0.71),
            Orient::Left => (TextAnchor::End, 0.32),
        };
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let format = self.scale.tick_format(self.tick_count);
        let values = self.scale.ticks(self.tick_count);

        for &value in &values {
            let at = self.scale.map(value) + OFFSET;
            list.push_line(
                z,
                self.point(origin, at, 0.0),
                self.point(origin, at, k * self.tick_size_inner),
                stroke,
            );
            list.push_text(
                z,
                TextCmd::new(format.format(value), self.point(origin, at, k * spacing), FONT_SIZE, Color::black())
                    .anchor(anchor)
                    .baseline_shift(dy),
            );
        }

        values.len()
    }
}
