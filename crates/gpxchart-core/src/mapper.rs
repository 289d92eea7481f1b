// File: crates/gpxchart-core/src/mapper.rs
// Summary: Affine map from data space to drawing-surface pixels.

use crate::bounds::Bounds;
use crate::types::Padding;

/// Maps data `(x, y)` into a `width × height` canvas, leaving `padding`
/// pixels around the plot. Pixel Y grows downwards, data Y upwards.
///
/// Callers must hand in bounds with `max > min` on both axes.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub bounds: Bounds,
}

impl CoordinateMapper {
    pub fn new(width: i32, height: i32, padding: Padding, bounds: Bounds) -> Self {
        Self { width: width as f64, height: height as f64, padding, bounds }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f64 {
        let b = &self.bounds;
        self.padding.left + (self.width - self.padding.hsum()) * (x - b.min_x) / (b.max_x - b.min_x)
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f64 {
        let b = &self.bounds;
        let bottom = self.height - self.padding.bottom;
        bottom - (bottom - self.padding.top) * (y - b.min_y) / (b.max_y - b.min_y)
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.to_px_x(x), self.to_px_y(y))
    }
}
