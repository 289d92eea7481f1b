// File: crates/gpxchart-core/src/theme.rs
// Summary: Colors and stroke widths used by the chart renderer.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub curve_stroke: skia::Color,
    pub curve_fill: skia::Color,
    /// Axis lines, ticks and tick labels.
    pub axis: skia::Color,
    /// "No data" watermark.
    pub warning: skia::Color,
    pub line_width: f32,
    /// Half-length of a tick mark in pixels.
    pub tick: f64,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(0xff, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(0xff, 0xe0, 0xe0, 0xe0),
            curve_stroke: skia::Color::from_argb(0xaf, 0x00, 0x00, 0x00),
            curve_fill: skia::Color::from_argb(0x40, 0x10, 0x10, 0x10),
            axis: skia::Color::from_argb(0xff, 0x36, 0x6a, 0xff),
            warning: skia::Color::from_argb(0xff, 0xff, 0x4e, 0x00),
            line_width: 0.5,
            tick: 3.0,
        }
    }

    /// Same layout on a dark canvas.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            curve_stroke: skia::Color::from_argb(0xcf, 0xeb, 0xeb, 0xf5),
            curve_fill: skia::Color::from_argb(96, 64, 160, 255),
            axis: skia::Color::from_argb(255, 180, 180, 190),
            warning: skia::Color::from_argb(0xff, 0xff, 0x4e, 0x00),
            line_width: 0.5,
            tick: 3.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
