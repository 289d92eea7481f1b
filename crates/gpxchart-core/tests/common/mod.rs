// File: crates/gpxchart-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests: synthetic tracks laid out due north.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use gpxchart_core::geometry::ONE_DEGREE;
use gpxchart_core::{ChartService, Track, TrackPoint};

pub fn service() -> ChartService {
    ChartService::new(&[env!("CARGO_MANIFEST_DIR")]).expect("manifest dir exists")
}

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

/// Point `metres` north of (0, 0).
pub fn north(metres: f64) -> TrackPoint {
    TrackPoint::new(metres / ONE_DEGREE, 0.0)
}

/// Points every `step` metres with the given elevations.
pub fn profile(step: f64, elevations: &[f64]) -> Track {
    Track::from_points(
        elevations
            .iter()
            .enumerate()
            .map(|(i, &e)| north(i as f64 * step).with_elevation(e))
            .collect(),
    )
}

/// Points every `step` metres, timestamped at the given offsets (seconds).
pub fn timed(step: f64, seconds: &[i64]) -> Track {
    Track::from_points(
        seconds
            .iter()
            .enumerate()
            .map(|(i, &s)| north(i as f64 * step).with_timestamp(start() + Duration::seconds(s)))
            .collect(),
    )
}

/// A rolling 5 km route with timestamps, elevations between roughly 200 and 400 m.
pub fn rolling(points: usize) -> Track {
    let step = 5000.0 / points as f64;
    Track::from_points(
        (0..points)
            .map(|i| {
                let x = i as f64 * step;
                north(x)
                    .with_elevation(300.0 + 100.0 * (x / 700.0).sin())
                    .with_timestamp(start() + Duration::seconds(i as i64 * 3))
            })
            .collect(),
    )
}
