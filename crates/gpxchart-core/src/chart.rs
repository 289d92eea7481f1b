// File: crates/gpxchart-core/src/chart.rs
// Summary: Chart parameters and the draw pipeline (background, grid, dual-tone area, axes, fallback).

use skia_safe as skia;

use crate::axis::Axis;
use crate::bounds::Bounds;
use crate::grid::multiples;
use crate::logging::ErrorLogger;
use crate::mapper::CoordinateMapper;
use crate::series::Point;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{Padding, DEFAULT_FONT_SIZE, HEIGHT, WIDTH};
use crate::units::{UnitRegistry, UnitType};

/// Watermark drawn in place of the curve when the data cannot be plotted.
pub const NO_DATA_MESSAGE: &str = "No enough data available";

/// Everything needed to draw one chart. Built per request and consumed by
/// the renderer.
#[derive(Clone, Debug)]
pub struct ChartParams {
    pub width: i32,
    pub height: i32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<Point>,
    /// Area fill; the theme's curve fill when unset.
    pub fill_color: Option<skia::Color>,
    pub unit: UnitType,
    /// Canvas pixels reserved around the plot.
    pub padding: Padding,
    /// Data-space margin added to the bounds.
    pub chart_padding: Padding,
    /// Fixed X range; `None` or `(0, 0)` derives it from the points.
    pub x_bounds: Option<(f64, f64)>,
    /// Fixed Y range; `None` or `(0, 0)` derives it from the points.
    pub y_bounds: Option<(f64, f64)>,
    pub theme: Theme,
    invalid: bool,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            points: Vec::new(),
            fill_color: None,
            unit: UnitType::Metric,
            padding: Padding::default_pixels(),
            chart_padding: Padding::default(),
            x_bounds: None,
            y_bounds: None,
            theme: Theme::default(),
            invalid: false,
        }
    }
}

impl ChartParams {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_unit(mut self, unit: UnitType) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_axes(mut self, x_axis: Axis, y_axis: Axis) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_chart_padding(mut self, chart_padding: Padding) -> Self {
        self.chart_padding = chart_padding;
        self
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn with_fill_color(mut self, color: skia::Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether these parameters describe the "no data" fallback chart.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Replacement drawn when the data bounds are unusable: unit-square
    /// bounds, no points, bare axes. Canvas size, pixel padding, colors and
    /// unit system carry over.
    pub fn invalid_from(orig: &ChartParams) -> Self {
        Self {
            width: orig.width,
            height: orig.height,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            points: Vec::new(),
            fill_color: orig.fill_color,
            unit: orig.unit,
            padding: orig.padding,
            chart_padding: Padding::default(),
            x_bounds: Some((Bounds::UNIT.min_x, Bounds::UNIT.max_x)),
            y_bounds: Some((Bounds::UNIT.min_y, Bounds::UNIT.max_y)),
            theme: orig.theme,
            invalid: true,
        }
    }

    /// Data bounds after chart padding, before any validity check.
    pub fn raw_bounds(&self) -> Bounds {
        Bounds::compute(&self.points, self.x_bounds, self.y_bounds).padded(&self.chart_padding)
    }

    /// Resolve the bounds, swapping in the invalid chart when they are
    /// degenerate. Any failing axis invalidates the whole chart.
    pub fn resolve(self, logger: &dyn ErrorLogger) -> (ChartParams, Bounds) {
        let bounds = self.raw_bounds();
        let problems = bounds.degeneracies();
        if problems.is_empty() {
            return (self, bounds);
        }
        logger.log_error(&format!(
            "unusable chart bounds {problems:?}: min_x={}, max_x={}, min_y={}, max_y={}",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
        ));
        (ChartParams::invalid_from(&self), Bounds::UNIT)
    }
}

/// Outcome of one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSummary {
    pub bounds: Bounds,
    pub invalid: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tone {
    Positive,
    Negative,
}

/// Draws prepared [`ChartParams`] onto a [`Surface`] in a fixed order.
pub struct ChartRenderer<'a> {
    units: &'a UnitRegistry,
    logger: &'a dyn ErrorLogger,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(units: &'a UnitRegistry, logger: &'a dyn ErrorLogger) -> Self {
        Self { units, logger }
    }

    pub fn render<S: Surface + ?Sized>(&self, params: ChartParams, surface: &mut S) -> RenderSummary {
        let theme = params.theme;
        surface.fill_rect(0.0, 0.0, params.width as f64, params.height as f64, theme.background);

        let (params, bounds) = params.resolve(self.logger);
        let map = CoordinateMapper::new(params.width, params.height, params.padding, bounds);

        draw_grid(surface, &params, &bounds, &map);
        draw_area(surface, &params, &bounds, &map);
        let font_size = self.draw_axes(surface, &params, &bounds, &map);

        if params.invalid {
            let (x, y) = map.to_px((bounds.min_x + bounds.max_x) / 2.0, (bounds.min_y + bounds.max_y) / 2.0);
            let width = surface.measure_text(NO_DATA_MESSAGE, font_size);
            surface.draw_text(NO_DATA_MESSAGE, x - width / 2.0, y + font_size + 4.0, font_size, theme.warning);
        }

        RenderSummary { bounds, invalid: params.invalid }
    }

    /// Axis lines, ticks and labels. Returns the last font size in effect.
    fn draw_axes<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        params: &ChartParams,
        b: &Bounds,
        map: &CoordinateMapper,
    ) -> f64 {
        let theme = &params.theme;
        let tick = theme.tick;
        let mut font_size = DEFAULT_FONT_SIZE;

        let x_axis = &params.x_axis;
        if x_axis.show {
            if x_axis.font_size > 0.0 {
                font_size = x_axis.font_size;
            }
            surface.stroke_line(map.to_px(b.min_x, b.min_y), map.to_px(b.max_x, b.min_y), theme.axis, theme.line_width);
            for v in multiples(x_axis.labels, b.min_x, b.max_x) {
                if v == 0.0 {
                    continue;
                }
                let (x, y) = map.to_px(v, b.min_y);
                surface.stroke_line((x, y - tick), (x, y + tick), theme.axis, theme.line_width);
                let txt = x_axis.format.format(v, self.units);
                let width = surface.measure_text(&txt, font_size);
                surface.draw_text(&txt, x - width / 2.0, y + font_size + 4.0, font_size, theme.axis);
            }
        }

        let y_axis = &params.y_axis;
        if y_axis.show {
            if y_axis.font_size > 0.0 {
                font_size = y_axis.font_size;
            }
            surface.stroke_line(map.to_px(b.min_x, b.min_y), map.to_px(b.min_x, b.max_y), theme.axis, theme.line_width);
            for v in multiples(y_axis.labels, b.min_y, b.max_y) {
                if v == 0.0 || v < b.min_y {
                    continue;
                }
                let (x, y) = map.to_px(b.min_x, v);
                surface.stroke_line((x - tick, y), (x + tick, y), theme.axis, theme.line_width);
                let txt = y_axis.format.format(v, self.units);
                let width = surface.measure_text(&txt, font_size);
                surface.draw_text(&txt, x - width - font_size / 2.0, y + font_size / 2.0, font_size, theme.axis);
            }
        }

        font_size
    }
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, params: &ChartParams, b: &Bounds, map: &CoordinateMapper) {
    let theme = &params.theme;
    for v in multiples(params.x_axis.grid, b.min_x, b.max_x) {
        if v < b.min_x {
            continue;
        }
        surface.stroke_line(map.to_px(v, b.min_y), map.to_px(v, b.max_y), theme.grid, theme.line_width);
    }
    for v in multiples(params.y_axis.grid, b.min_y, b.max_y) {
        if v < b.min_y {
            continue;
        }
        surface.stroke_line(map.to_px(b.min_x, v), map.to_px(b.max_x, v), theme.grid, theme.line_width);
    }
}

/// The curve as two closed areas: values clamped to `>= 0`, then to `<= 0`.
fn draw_area<S: Surface + ?Sized>(surface: &mut S, params: &ChartParams, b: &Bounds, map: &CoordinateMapper) {
    let (Some(first), Some(last)) = (params.points.first(), params.points.last()) else {
        return;
    };
    let theme = &params.theme;
    let fill = params.fill_color.unwrap_or(theme.curve_fill);
    let baseline = if (b.min_y..=b.max_y).contains(&0.0) { 0.0 } else { b.min_y };

    for tone in [Tone::Positive, Tone::Negative] {
        let mut outline = Vec::with_capacity(params.points.len() + 3);
        outline.push(map.to_px(first.x, b.min_y));
        for p in &params.points {
            let y = match tone {
                Tone::Positive => p.y.max(0.0),
                Tone::Negative => p.y.min(0.0),
            };
            outline.push(map.to_px(p.x, y.max(b.min_y)));
        }
        outline.push(map.to_px(last.x, baseline));
        outline.push(map.to_px(0.0, baseline));
        surface.fill_area(&outline, fill, theme.curve_stroke, theme.line_width);
    }
}
