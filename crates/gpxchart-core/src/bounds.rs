// File: crates/gpxchart-core/src/bounds.rs
// Summary: Data-space extents of a chart: derivation from points, chart padding, and degeneracy checks.

use crate::series::Point;
use crate::types::Padding;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Which check rejected a set of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degenerate {
    /// `min_x >= max_x`
    EmptyX,
    /// `min_y >= max_y`
    EmptyY,
    NonFiniteX,
    NonFiniteY,
}

impl Bounds {
    /// Unit square drawn by the invalid chart.
    pub const UNIT: Bounds = Bounds { min_x: 0.0, max_x: 1.0, min_y: 0.0, max_y: 1.0 };

    /// Compute each axis from `points` unless it is pinned. A pin of
    /// `(0.0, 0.0)` counts as not pinned. With no points an unpinned axis
    /// ends up as `(+inf, -inf)`.
    pub fn compute(points: &[Point], pin_x: Option<(f64, f64)>, pin_y: Option<(f64, f64)>) -> Self {
        let (min_x, max_x) = match pinned(pin_x) {
            Some(r) => r,
            None => extent(points.iter().map(|p| p.x)),
        };
        let (min_y, max_y) = match pinned(pin_y) {
            Some(r) => r,
            None => extent(points.iter().map(|p| p.y)),
        };
        Self { min_x, max_x, min_y, max_y }
    }

    /// Widen by a data-space margin: left/right on X, bottom/top on Y.
    pub fn padded(self, pad: &Padding) -> Self {
        Self {
            min_x: self.min_x - pad.left,
            max_x: self.max_x + pad.right,
            min_y: self.min_y - pad.bottom,
            max_y: self.max_y + pad.top,
        }
    }

    /// Every reason these bounds cannot be plotted; empty when usable.
    pub fn degeneracies(&self) -> Vec<Degenerate> {
        let mut out = Vec::new();
        if self.min_x >= self.max_x {
            out.push(Degenerate::EmptyX);
        }
        if self.min_y >= self.max_y {
            out.push(Degenerate::EmptyY);
        }
        if !self.min_x.is_finite() || !self.max_x.is_finite() {
            out.push(Degenerate::NonFiniteX);
        }
        if !self.min_y.is_finite() || !self.max_y.is_finite() {
            out.push(Degenerate::NonFiniteY);
        }
        // NaN fails every comparison, so the range checks above miss it
        out
    }

    pub fn is_valid(&self) -> bool {
        self.degeneracies().is_empty()
    }
}

fn pinned(pin: Option<(f64, f64)>) -> Option<(f64, f64)> {
    pin.filter(|&(lo, hi)| !(lo == 0.0 && hi == 0.0))
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
