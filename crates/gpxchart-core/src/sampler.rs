// File: crates/gpxchart-core/src/sampler.rs
// Summary: Extraction of elevation, speed and steepness series from a track.

use crate::geometry::{distance_2d, elevation_angle};
use crate::series::{Point, Series};
use crate::track::Track;

/// Speed and steepness charts thin the track to this many points first.
pub const REDUCE_MAX_POINTS: usize = 1000;
/// Minimum spacing in metres between points kept by the reduction.
pub const REDUCE_MIN_DISTANCE: f64 = 50.0;
/// Vertical smoothing passes applied before differentiating elevations.
pub const STEEPNESS_SMOOTH_PASSES: usize = 4;
/// Starting value of the observed elevation minimum.
pub const ELEVATION_MIN_SEED: f64 = 1000.0;

/// Cumulative distance and elevation for every point, in track order.
///
/// The minimum starts at [`ELEVATION_MIN_SEED`] and the maximum at zero, so
/// tracks that never rise above sea level still report a usable range.
/// Missing elevations count as zero.
pub fn elevation(track: &Track) -> Series {
    let mut out = Series { min: ELEVATION_MIN_SEED, max: 0.0, ..Series::default() };
    let mut d = 0.0;
    for segment in &track.segments {
        for (n, pt) in segment.points.iter().enumerate() {
            if n > 0 {
                d += distance_2d(pt, &segment.points[n - 1]);
            }
            let ele = pt.elevation_or_zero();
            out.points.push(Point::new(d, ele));
            out.min = out.min.min(ele);
            out.max = out.max.max(ele);
        }
    }
    out.distance = d;
    out
}

/// Speed (m/s) at every interior point whose neighbours and itself carry
/// timestamps, measured over the two adjacent legs.
///
/// Points without a full timestamp window are skipped, so the series can be
/// shorter than the track. A window with zero duration yields an infinite
/// speed and one running backwards a negative speed; both are kept and left
/// to the bounds check.
pub fn speed(track: &Track) -> Series {
    let mut track = track.clone();
    track.reduce_points(REDUCE_MAX_POINTS, REDUCE_MIN_DISTANCE);

    let mut out = Series::default();
    let mut d = 0.0;
    for segment in &track.segments {
        let pts = &segment.points;
        for n in 0..pts.len() {
            if n > 0 {
                d += distance_2d(&pts[n], &pts[n - 1]);
            }
            if n == 0 || n + 1 >= pts.len() {
                continue;
            }
            let (prev, pt, next) = (&pts[n - 1], &pts[n], &pts[n + 1]);
            let (Some(t0), Some(_), Some(t2)) = (prev.timestamp, pt.timestamp, next.timestamp) else {
                continue;
            };
            let seconds = (t2 - t0).num_milliseconds() as f64 / 1000.0;
            let length = distance_2d(next, pt) + distance_2d(pt, prev);
            let v = length / seconds;
            if out.points.is_empty() || v < out.min {
                out.min = v;
            }
            if out.points.is_empty() || v > out.max {
                out.max = v;
            }
            out.points.push(Point::new(d, v));
        }
    }
    out.distance = d;
    out
}

/// Signed elevation angle (degrees) at every point after reduction and
/// smoothing. Segment boundaries and points with a neighbour lacking an
/// elevation get 0, so every input point yields one output point.
///
/// `min`/`max` are `∓4 · mean(|angle|)`, the range the chart pins its Y axis to.
pub fn steepness(track: &Track) -> Series {
    let mut track = track.clone();
    track.reduce_points(REDUCE_MAX_POINTS, REDUCE_MIN_DISTANCE);
    for _ in 0..STEEPNESS_SMOOTH_PASSES {
        track.smooth_vertical();
    }

    let mut out = Series::default();
    let mut d = 0.0;
    for segment in &track.segments {
        let pts = &segment.points;
        for n in 0..pts.len() {
            if n > 0 {
                d += distance_2d(&pts[n], &pts[n - 1]);
            }
            let angle = if n > 0 && n + 1 < pts.len() {
                elevation_angle(&pts[n - 1], &pts[n + 1])
            } else {
                0.0
            };
            out.points.push(Point::new(d, angle));
        }
    }

    let scale = if out.points.is_empty() {
        0.0
    } else {
        4.0 * out.points.iter().map(|p| p.y.abs()).sum::<f64>() / out.points.len() as f64
    };
    out.min = -scale;
    out.max = scale;
    out.distance = d;
    out
}
