use core::fmt;

use super::Vec2;

/// Uniform scale followed by a translation: `p ↦ p · scale + translate`.
///
/// This is the shape of every group transform on a surface and of the view
/// transform produced by zoom gestures. It prints in SVG attribute syntax.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { translate: Vec2::zero(), scale: 1.0 }
    }

    #[inline]
    pub const fn new(translate: Vec2, scale: f32) -> Self {
        Self { translate, scale }
    }

    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self { translate: Vec2::new(x, y), scale: 1.0 }
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    /// Maps a point from local space into the parent space.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        p * self.scale + self.translate
    }

    /// Maps a point from the parent space back into local space.
    #[inline]
    pub fn invert(self, p: Vec2) -> Vec2 {
        (p - self.translate) * (1.0 / self.scale)
    }

    /// Same translation, new scale.
    #[inline]
    pub fn with_scale(self, scale: f32) -> Transform {
        Transform { translate: self.translate, scale }
    }

    /// Shifts the translation by `delta` (parent-space pixels).
    #[inline]
    pub fn translated(self, delta: Vec2) -> Transform {
        Transform { translate: self.translate + delta, scale: self.scale }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({},{}) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_then_invert_returns_the_point() {
        let t = Transform::new(Vec2::new(-120.0, 35.0), 2.5);
        let p = Vec2::new(17.0, 44.0);
        let back = t.invert(t.apply(p));
        assert!((back.x - p.x).abs() < 1e-4);
        assert!((back.y - p.y).abs() < 1e-4);
    }

    #[test]
    fn displays_as_svg_attribute() {
        assert_eq!(
            Transform::translation(40.0, 20.0).to_string(),
            "translate(40,20) scale(1)"
        );
        assert_eq!(
            Transform::new(Vec2::new(-1.5, 2.0), 8.0).to_string(),
            "translate(-1.5,2) scale(8)"
        );
    }
}
