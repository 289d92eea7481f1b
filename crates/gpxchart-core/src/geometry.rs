// File: crates/gpxchart-core/src/geometry.rs
// Summary: Geodesic helpers for track points (planar/haversine distance, elevation angle).

use crate::track::TrackPoint;

/// Mean earth radius used by the haversine fallback, in metres.
pub const EARTH_RADIUS: f64 = 6378.14 * 1000.0;
/// Length of one degree of latitude, in metres.
pub const ONE_DEGREE: f64 = 1000.0 * 10000.8 / 90.0;

/// Beyond this many degrees in either direction the planar approximation is dropped.
const PLANAR_LIMIT_DEG: f64 = 0.2;

pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

/// Horizontal distance in metres between two coordinates.
pub fn planar_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if (lat1 - lat2).abs() > PLANAR_LIMIT_DEG || (lon1 - lon2).abs() > PLANAR_LIMIT_DEG {
        return haversine_distance(lat1, lon1, lat2, lon2);
    }
    let coef = lat1.to_radians().cos();
    let x = lat1 - lat2;
    let y = (lon1 - lon2) * coef;
    (x * x + y * y).sqrt() * ONE_DEGREE
}

#[inline]
pub fn distance_2d(a: &TrackPoint, b: &TrackPoint) -> f64 {
    planar_distance(a.lat, a.lon, b.lat, b.lon)
}

/// Like [`distance_2d`], but includes the climb when both points carry an elevation.
pub fn distance_3d(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let d2 = distance_2d(a, b);
    match (a.elevation, b.elevation) {
        (Some(ea), Some(eb)) if ea != eb => (d2 * d2 + (ea - eb).powi(2)).sqrt(),
        _ => d2,
    }
}

/// Signed angle in degrees of the line from `a` to `b` against the horizon.
/// Zero when an elevation is missing or the points share a position.
pub fn elevation_angle(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let (Some(ea), Some(eb)) = (a.elevation, b.elevation) else {
        return 0.0;
    };
    let run = distance_2d(a, b);
    if run == 0.0 {
        return 0.0;
    }
    ((eb - ea) / run).atan().to_degrees()
}
