use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
    /// Style class carried through to serialized output (e.g. `city`).
    pub class: Option<String>,
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        class: Option<&str>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd {
            center,
            radius,
            fill,
            class: class.map(str::to_owned),
        }));
    }
}
