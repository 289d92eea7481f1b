// File: crates/gpxchart-core/src/units.rs
// Summary: Unit systems, the unit-symbol registry, and human-readable length/altitude/speed formatting.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const ONE_FEET: f64 = 0.3048;
pub const ONE_YARD: f64 = 0.9144;
pub const ONE_MILE: f64 = 1.609344 * 1000.0;
pub const ONE_NAUTICAL_MILE: f64 = 1852.0;

pub const SPEED_MPS: f64 = 1.0;
pub const SPEED_KMH: f64 = 1000.0 / 3600.0;
pub const SPEED_MPH: f64 = ONE_MILE / 3600.0;
pub const SPEED_KNOT: f64 = ONE_NAUTICAL_MILE / 3600.0;

/// Altitudes outside this band (metres) are formatted as `n/a`.
const ALTITUDE_LIMIT_M: f64 = 20_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitType {
    #[default]
    Metric,
    Imperial,
    Nautical,
}

impl UnitType {
    pub const ALL: [UnitType; 3] = [UnitType::Metric, UnitType::Imperial, UnitType::Nautical];

    pub fn name(&self) -> &'static str {
        match self {
            UnitType::Metric => "metric",
            UnitType::Imperial => "imperial",
            UnitType::Nautical => "nautical",
        }
    }

    /// Length units of this system with their size in metres.
    pub fn units(&self) -> &'static [(&'static str, f64)] {
        match self {
            UnitType::Metric => &[("m", 1.0), ("km", 1000.0), ("cm", 0.01)],
            UnitType::Imperial => &[("ft", ONE_FEET), ("yd", ONE_YARD), ("mi", ONE_MILE)],
            UnitType::Nautical => &[("NM", ONE_NAUTICAL_MILE)],
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitType {
    type Err = String;

    /// Accepts the full name or its first letter (`m`, `i`, `n`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "metric" => Ok(UnitType::Metric),
            "i" | "imperial" => Ok(UnitType::Imperial),
            "n" | "nautical" => Ok(UnitType::Nautical),
            other => Err(format!("unknown unit type '{other}'")),
        }
    }
}

/// Immutable lookup table from unit symbol to its size in base SI units
/// (metres for lengths, metres/second for speeds).
///
/// Built once per service and shared by reference; symbols are matched
/// case-insensitively.
#[derive(Clone, Debug)]
pub struct UnitRegistry {
    lengths: HashMap<String, f64>,
    speeds: HashMap<String, f64>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut lengths = HashMap::new();
        for ut in UnitType::ALL {
            for &(symbol, factor) in ut.units() {
                lengths.insert(symbol.to_lowercase(), factor);
            }
        }
        let speeds = [("mps", SPEED_MPS), ("kmh", SPEED_KMH), ("mph", SPEED_MPH), ("knot", SPEED_KNOT)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Self { lengths, speeds }
    }

    /// Size of `symbol` in base units, if registered.
    pub fn factor(&self, symbol: &str) -> Option<f64> {
        let key = symbol.trim().to_lowercase();
        self.speeds.get(&key).or_else(|| self.lengths.get(&key)).copied()
    }

    /// All registered symbols (lower-cased), lengths first.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.lengths.keys().chain(self.speeds.keys()).map(String::as_str)
    }

    /// Convert `value` from metres (or m/s) into `symbol`. Unknown symbols yield 0.
    pub fn convert_from_base(&self, value: f64, symbol: &str) -> f64 {
        match self.factor(symbol) {
            Some(factor) => value / factor,
            None => 0.0,
        }
    }

    pub fn format_length(&self, length_m: f64, unit: UnitType) -> String {
        if length_m < 0.0 {
            return "n/a".to_string();
        }
        match unit {
            UnitType::Nautical => {
                let miles = self.convert_from_base(length_m, "NM");
                format_float(miles, if miles < 10.0 { 2 } else { 1 }) + "NM"
            }
            UnitType::Imperial => {
                let miles = self.convert_from_base(length_m, "mi");
                format_float(miles, if miles < 10.0 { 2 } else { 1 }) + "mi"
            }
            UnitType::Metric => {
                if length_m < 1000.0 {
                    format_float(length_m, 0) + "m"
                } else if length_m < 50_000.0 {
                    format_float(length_m / 1000.0, 2) + "km"
                } else {
                    format_float(length_m / 1000.0, 1) + "km"
                }
            }
        }
    }

    pub fn format_altitude(&self, altitude_m: f64, unit: UnitType) -> String {
        if !(-ALTITUDE_LIMIT_M..=ALTITUDE_LIMIT_M).contains(&altitude_m) {
            return "n/a".to_string();
        }
        match unit {
            UnitType::Metric => format_float(altitude_m, 0) + "m",
            UnitType::Imperial | UnitType::Nautical => {
                format_float(self.convert_from_base(altitude_m, "ft"), 0) + "ft"
            }
        }
    }

    /// Format a speed given in m/s. With `round` the value is an integer.
    pub fn format_speed(&self, mps: f64, unit: UnitType, round: bool) -> String {
        if mps <= 0.0 {
            return "n/a".to_string();
        }
        let (speed, suffix) = match unit {
            UnitType::Imperial => (self.convert_from_base(mps, "mph"), "mph"),
            UnitType::Nautical => (self.convert_from_base(mps, "knot"), "kn"),
            UnitType::Metric => (self.convert_from_base(mps, "kmh"), "kmh"),
        };
        if round {
            return format!("{}{suffix}", speed.round() as i64);
        }
        if speed < 10.0 {
            format!("{speed:.2}{suffix}")
        } else {
            format!("{speed:.1}{suffix}")
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Format with `digits` decimals, then strip trailing zeros and a dangling point.
pub fn format_float(value: f64, digits: usize) -> String {
    let mut s = format!("{value:.digits$}");
    if s.contains('.') {
        s.truncate(s.trim_end_matches('0').len());
    }
    s.truncate(s.trim_end_matches('.').len());
    s
}
