use biome_engine::coords::{Transform, Viewport};

use crate::scale::LinearScale;

pub const RAIN_DOMAIN: [f32; 2] = [0.0, 3000.0];
pub const TEMP_DOMAIN: [f32; 2] = [0.0, 40.0];

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const CHART: Margins = Margins { top: 20.0, right: 20.0, bottom: 30.0, left: 40.0 };
}

impl Default for Margins {
    fn default() -> Self {
        Self::CHART
    }
}

/// Geometry derived from the surface size: plot area and both scales.
///
/// Zero or negative sizes are kept as-is and produce degenerate geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartLayout {
    pub margins: Margins,
    pub inner_width: f32,
    pub inner_height: f32,
    /// Rainfall (mm) → horizontal pixel.
    pub x: LinearScale,
    /// Temperature (°C) → vertical pixel, growing upwards.
    pub y: LinearScale,
}

impl ChartLayout {
    pub fn new(size: Viewport, margins: Margins) -> Self {
        let inner_width = size.width - margins.left - margins.right;
        let inner_height = size.height - margins.top - margins.bottom;
        Self {
            margins,
            inner_width,
            inner_height,
            x: LinearScale::new(RAIN_DOMAIN, [0.0, inner_width]),
            y: LinearScale::new(TEMP_DOMAIN, [inner_height, 0.0]),
        }
    }

    /// Offset of the plot area inside the surface.
    pub fn margin_transform(&self) -> Transform {
        Transform::translation(self.margins.left, self.margins.top)
    }
}
