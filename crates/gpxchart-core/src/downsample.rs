// File: crates/gpxchart-core/src/downsample.rs
// Summary: Track point reduction (minimum spacing) and vertical elevation smoothing.

use crate::geometry::distance_3d;
use crate::track::TrackPoint;

/// Keep the first point and every point at least `min_distance` (3-D) from the
/// last kept one. Returns the input unchanged when `min_distance <= 0`.
pub fn reduce_by_distance(points: &[TrackPoint], min_distance: f64) -> Vec<TrackPoint> {
    if min_distance <= 0.0 || points.len() <= 1 {
        return points.to_vec();
    }
    let mut kept: Vec<TrackPoint> = Vec::with_capacity(points.len());
    kept.push(points[0]);
    for pt in &points[1..] {
        // kept is never empty here
        let last = kept[kept.len() - 1];
        if distance_3d(pt, &last) >= min_distance {
            kept.push(*pt);
        }
    }
    kept
}

/// Weighted 3-point average of elevations. Boundary points, and points whose
/// window has a missing elevation, keep their value.
pub fn smooth_vertical(points: &[TrackPoint]) -> Vec<TrackPoint> {
    let mut out = points.to_vec();
    if points.len() < 3 {
        return out;
    }
    for i in 1..points.len() - 1 {
        if let (Some(prev), Some(cur), Some(next)) =
            (points[i - 1].elevation, points[i].elevation, points[i + 1].elevation)
        {
            out[i].elevation = Some(prev * 0.3 + cur * 0.4 + next * 0.3);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ONE_DEGREE;

    fn line(n: usize, step_m: f64) -> Vec<TrackPoint> {
        (0..n).map(|i| TrackPoint::new(i as f64 * step_m / ONE_DEGREE, 0.0)).collect()
    }

    #[test]
    fn reduce_keeps_spacing() {
        let pts = line(101, 10.0);
        let out = reduce_by_distance(&pts, 45.0);
        assert_eq!(out.len(), 21);
        assert_eq!(out[0], pts[0]);
    }

    #[test]
    fn smooth_leaves_edges_and_gaps() {
        let mut pts = line(4, 10.0);
        pts[0].elevation = Some(0.0);
        pts[1].elevation = Some(10.0);
        pts[2].elevation = Some(0.0);
        let out = smooth_vertical(&pts);
        assert_eq!(out[0].elevation, Some(0.0));
        assert!((out[1].elevation.unwrap() - 4.0).abs() < 1e-12);
        // pts[3] has no elevation, so pts[2]'s window is incomplete
        assert_eq!(out[2].elevation, Some(0.0));
        assert_eq!(out[3].elevation, None);
    }
}
