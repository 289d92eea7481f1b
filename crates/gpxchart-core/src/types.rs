// File: crates/gpxchart-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, paddings, font size).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 900;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 200;

pub const DEFAULT_LEFT_PADDING_PIXELS: f64 = 40.0;
pub const DEFAULT_BOTTOM_PADDING_PIXELS: f64 = 20.0;

/// Axis label size used when neither axis sets one.
pub const DEFAULT_FONT_SIZE: f64 = 8.0;

/// Four-sided margin. Used both in pixels (canvas border around the plot)
/// and in data units (margin added to the data bounds).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Total horizontal padding (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }

    /// Pixel padding leaving room for the axis labels on the left and bottom.
    pub const fn default_pixels() -> Self {
        Self::new(0.0, 0.0, DEFAULT_BOTTOM_PADDING_PIXELS, DEFAULT_LEFT_PADDING_PIXELS)
    }
}
