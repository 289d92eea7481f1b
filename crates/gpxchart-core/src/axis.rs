// File: crates/gpxchart-core/src/axis.rs
// Summary: Axis model (visibility, grid/label spacing, font size) and tick label formats.

use crate::units::{UnitRegistry, UnitType};

/// How tick values on an axis are turned into text.
#[derive(Clone, Copy, Debug, Default)]
pub enum AxisFormat {
    /// Two decimals, no unit.
    #[default]
    Default,
    Length(UnitType),
    Altitude(UnitType),
    Speed(UnitType),
    /// Whole degrees.
    Steepness,
    Custom(fn(f64) -> String),
}

impl AxisFormat {
    pub fn format(&self, value: f64, units: &UnitRegistry) -> String {
        match *self {
            AxisFormat::Default => format!("{value:.2}"),
            AxisFormat::Length(ut) => units.format_length(value, ut),
            AxisFormat::Altitude(ut) => units.format_altitude(value, ut),
            AxisFormat::Speed(ut) => units.format_speed(value, ut, true),
            AxisFormat::Steepness => format!("{}°", value.round() as i64),
            AxisFormat::Custom(f) => f(value),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, AxisFormat::Default)
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub show: bool,
    /// Grid line spacing in data units; 0 lets the scaler choose.
    pub grid: f64,
    /// Labelled tick spacing in data units; 0 lets the scaler choose.
    pub labels: f64,
    /// Label font size in pixels; 0 keeps the renderer default.
    pub font_size: f64,
    pub format: AxisFormat,
}

impl Axis {
    pub fn new(grid: f64, labels: f64) -> Self {
        Self { grid, labels, ..Self::default() }
    }

    pub fn hidden() -> Self {
        Self { show: false, ..Self::default() }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_format(mut self, format: AxisFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self { show: true, grid: 0.0, labels: 0.0, font_size: 0.0, format: AxisFormat::Default }
    }
}
