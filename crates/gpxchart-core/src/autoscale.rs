// File: crates/gpxchart-core/src/autoscale.rs
// Summary: Grid/label spacing heuristics per axis role and unit system.

use crate::axis::{Axis, AxisFormat};
use crate::units::{UnitType, ONE_FEET, ONE_MILE, ONE_NAUTICAL_MILE, SPEED_KMH, SPEED_KNOT, SPEED_MPH};

/// One row of a spacing table: values up to `upto` (in table units) get
/// `(grid, labels)`. The last row of every table uses `f64::INFINITY`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub upto: f64,
    pub grid: f64,
    pub labels: f64,
}

const fn band(upto: f64, grid: f64, labels: f64) -> Band {
    Band { upto, grid, labels }
}

const INF: f64 = f64::INFINITY;

/// Metric length table, in metres.
const LENGTH_METRIC: [Band; 9] = [
    band(1e3, 100.0, 100.0),
    band(4e3, 500.0, 500.0),
    band(1e4, 500.0, 1000.0),
    band(2e4, 1000.0, 2000.0),
    band(5e4, 1000.0, 2000.0),
    band(1e5, 2500.0, 5000.0),
    band(2e5, 5000.0, 10000.0),
    band(4e5, 5000.0, 25000.0),
    band(INF, 50000.0, 100000.0),
];

/// Mile-based length table, in miles (or nautical miles).
const LENGTH_MILES: [Band; 9] = [
    band(1.0, 0.1, 0.1),
    band(4.0, 0.5, 0.5),
    band(10.0, 1.0, 0.5),
    band(20.0, 2.0, 1.0),
    band(50.0, 5.0, 2.5),
    band(100.0, 10.0, 5.0),
    band(200.0, 10.0, 5.0),
    band(400.0, 25.0, 5.0),
    band(INF, 100.0, 100.0),
];

/// Metric elevation table, in metres.
const ELEVATION_METRIC: [Band; 5] = [
    band(100.0, 20.0, 20.0),
    band(500.0, 50.0, 100.0),
    band(1000.0, 100.0, 200.0),
    band(2000.0, 125.0, 250.0),
    band(INF, 250.0, 500.0),
];

/// Imperial/nautical elevation table, in feet.
const ELEVATION_FEET: [Band; 8] = [
    band(50.0, 10.0, 10.0),
    band(100.0, 20.0, 20.0),
    band(500.0, 100.0, 50.0),
    band(1000.0, 200.0, 100.0),
    band(4000.0, 500.0, 500.0),
    band(10000.0, 1000.0, 1000.0),
    band(100000.0, 10000.0, 10000.0),
    band(INF, 10000.0, 10000.0),
];

/// Speed table, in the unit system's natural speed unit (km/h, mph, knot).
const SPEED: [Band; 5] = [
    band(10.0, 1.0, 2.0),
    band(25.0, 2.5, 5.0),
    band(50.0, 5.0, 10.0),
    band(100.0, 10.0, 20.0),
    band(INF, 25.0, 50.0),
];

/// Steepness table, in degrees, independent of the unit system.
const STEEPNESS: [Band; 4] = [
    band(5.0, 1.0, 1.0),
    band(10.0, 1.0, 2.0),
    band(20.0, 5.0, 5.0),
    band(INF, 5.0, 10.0),
];

/// Semantic role of an axis; decides table, keying value and formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRole {
    /// Distance along the track (X axis of every chart).
    Length,
    Elevation,
    Speed,
    Steepness,
}

/// Pick the `(grid, labels)` pair for `value` from `table`, whose thresholds
/// and pairs are multiples of `unit`.
pub fn pick(table: &[Band], value: f64, unit: f64) -> (f64, f64) {
    let row = table
        .iter()
        .find(|b| value <= b.upto * unit)
        .or(table.last())
        .copied()
        .unwrap_or(band(INF, 0.0, 0.0));
    (row.grid * unit, row.labels * unit)
}

/// Spacing chosen for `role` given the observed data, in base units.
///
/// The keying value depends on the role: total length for [`AxisRole::Length`],
/// `max - min` for elevation, and `max` for speed and steepness.
pub fn spacing(role: AxisRole, min: f64, max: f64, unit: UnitType) -> (f64, f64) {
    match role {
        AxisRole::Length => match unit {
            UnitType::Metric => pick(&LENGTH_METRIC, max, 1.0),
            UnitType::Imperial => pick(&LENGTH_MILES, max, ONE_MILE),
            UnitType::Nautical => pick(&LENGTH_MILES, max, ONE_NAUTICAL_MILE),
        },
        AxisRole::Elevation => match unit {
            UnitType::Metric => pick(&ELEVATION_METRIC, max - min, 1.0),
            UnitType::Imperial | UnitType::Nautical => pick(&ELEVATION_FEET, max - min, ONE_FEET),
        },
        AxisRole::Speed => {
            let increment = match unit {
                UnitType::Metric => SPEED_KMH,
                UnitType::Imperial => SPEED_MPH,
                UnitType::Nautical => SPEED_KNOT,
            };
            pick(&SPEED, max, increment)
        }
        AxisRole::Steepness => pick(&STEEPNESS, max, 1.0),
    }
}

pub fn default_format(role: AxisRole, unit: UnitType) -> AxisFormat {
    match role {
        AxisRole::Length => AxisFormat::Length(unit),
        AxisRole::Elevation => AxisFormat::Altitude(unit),
        AxisRole::Speed => AxisFormat::Speed(unit),
        AxisRole::Steepness => AxisFormat::Steepness,
    }
}

/// Fill in whatever the caller left unset on `axis`: zero grid/labels
/// spacing and the default formatter. Explicit values are kept.
pub fn prepare_axis(axis: &mut Axis, role: AxisRole, min: f64, max: f64, unit: UnitType) {
    if axis.format.is_default() {
        axis.format = default_format(role, unit);
    }
    let (grid, labels) = spacing(role, min, max, unit);
    if axis.grid == 0.0 {
        axis.grid = grid;
    }
    if axis.labels == 0.0 {
        axis.labels = labels;
    }
}

/// X axis of every chart; keyed on the total track length.
pub fn prepare_length_axis(axis: &mut Axis, length: f64, unit: UnitType) {
    prepare_axis(axis, AxisRole::Length, 0.0, length, unit);
}

pub fn prepare_elevation_axis(axis: &mut Axis, min: f64, max: f64, unit: UnitType) {
    prepare_axis(axis, AxisRole::Elevation, min, max, unit);
}

pub fn prepare_speed_axis(axis: &mut Axis, min: f64, max: f64, unit: UnitType) {
    prepare_axis(axis, AxisRole::Speed, min, max, unit);
}

pub fn prepare_steepness_axis(axis: &mut Axis, max: f64) {
    prepare_axis(axis, AxisRole::Steepness, -max, max, UnitType::Metric);
}
