// File: crates/gpxchart-core/src/series.rs
// Summary: Plottable (distance, value) points and the sampled series produced from a track.

/// A chart-space point: `x` is cumulative distance (m), `y` the signal value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Output of a sampler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// Ordered by non-decreasing `x`.
    pub points: Vec<Point>,
    pub min: f64,
    pub max: f64,
    /// Total planar distance walked over the track, in metres.
    pub distance: f64,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}
