// File: crates/gpxchart-core/src/track.rs
// Summary: Read-only GPS track model (segments of lat/lon points with optional elevation and time).

use chrono::{DateTime, Utc};

use crate::downsample;
use crate::geometry::distance_3d;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, elevation: None, timestamp: None }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Elevation or 0 when absent.
    pub fn elevation_or_zero(&self) -> f64 {
        self.elevation.unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

impl TrackSegment {
    pub fn new(points: Vec<TrackPoint>) -> Self {
        Self { points }
    }

    pub fn length_3d(&self) -> f64 {
        self.points.windows(2).map(|w| distance_3d(&w[0], &w[1])).sum()
    }
}

/// An ordered collection of segments, as handed over by a track parser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    pub segments: Vec<TrackSegment>,
}

impl Track {
    pub fn new(segments: Vec<TrackSegment>) -> Self {
        Self { segments }
    }

    /// Single-segment track.
    pub fn from_points(points: Vec<TrackPoint>) -> Self {
        Self { segments: vec![TrackSegment::new(points)] }
    }

    pub fn points_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }

    pub fn length_3d(&self) -> f64 {
        self.segments.iter().map(TrackSegment::length_3d).sum()
    }

    /// Thin the track to roughly `max_points`, keeping points at least
    /// `min_distance` metres apart.
    pub fn reduce_points(&mut self, max_points: usize, min_distance: f64) {
        let count = self.points_count();
        if count < max_points && min_distance <= 0.0 {
            return;
        }
        let spacing = min_distance.max((self.length_3d() / max_points.max(1) as f64).ceil());
        for segment in &mut self.segments {
            segment.points = downsample::reduce_by_distance(&segment.points, spacing);
        }
    }

    /// One pass of the 0.3/0.4/0.3 vertical filter over every segment.
    pub fn smooth_vertical(&mut self) {
        for segment in &mut self.segments {
            segment.points = downsample::smooth_vertical(&segment.points);
        }
    }
}
