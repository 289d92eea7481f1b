// File: crates/gpxchart-core/src/lib.rs
// Summary: Core library entry point; exports the track model, samplers, axis scaling and chart rendering.

pub mod autoscale;
pub mod axis;
pub mod bounds;
pub mod chart;
pub mod downsample;
pub mod error;
pub mod font;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod mapper;
pub mod sampler;
pub mod series;
pub mod service;
pub mod surface;
pub mod text;
pub mod theme;
pub mod track;
pub mod types;
pub mod units;

pub use autoscale::AxisRole;
pub use axis::{Axis, AxisFormat};
pub use bounds::Bounds;
pub use chart::{ChartParams, ChartRenderer, RenderSummary, NO_DATA_MESSAGE};
pub use error::ChartError;
pub use logging::{ErrorLogger, NullLogger, TracingLogger};
pub use mapper::CoordinateMapper;
pub use series::{Point, Series};
pub use service::{ChartService, OutputFormat};
pub use surface::{DrawOp, RecordingSurface, SkiaSurface, Surface};
pub use theme::Theme;
pub use track::{Track, TrackPoint, TrackSegment};
pub use types::Padding;
pub use units::{UnitRegistry, UnitType};
