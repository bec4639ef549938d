use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Straight segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

/// Open polyline through `points`, unfilled.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub points: Vec<Vec2>,
    pub stroke: Stroke,
}

impl DrawList {
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, stroke }));
    }

    /// Records a polyline. Fewer than two points records nothing.
    pub fn push_path(&mut self, z: ZIndex, points: Vec<Vec2>, stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        self.push(z, DrawCmd::Path(PathCmd { points, stroke }));
    }
}
