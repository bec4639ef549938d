/// Pixel dimensions of a drawing surface or window.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True for finite, strictly positive dimensions.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Whole-pixel size for raster targets, at least 1×1.
    #[inline]
    pub fn pixel_size(self, pixel_ratio: f32) -> (u32, u32) {
        let w = (self.width * pixel_ratio).round().max(1.0) as u32;
        let h = (self.height * pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Viewport::new(800.0, 600.0).is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, -1.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 1.0).is_valid());
    }

    #[test]
    fn pixel_size_scales_and_floors_at_one() {
        assert_eq!(Viewport::new(800.0, 600.0).pixel_size(2.0), (1600, 1200));
        assert_eq!(Viewport::new(0.0, -5.0).pixel_size(1.0), (1, 1));
    }
}
