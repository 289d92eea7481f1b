// File: crates/gpxchart-core/src/surface.rs
// Summary: Drawing primitives the renderer needs, a Skia canvas implementation, and a recorder.

use skia_safe as skia;

use crate::text::TextShaper;

/// What the chart renderer draws onto. Coordinates are canvas pixels with
/// the origin top-left.
///
/// Text placement is two-step: [`Surface::measure_text`] must report the
/// width [`Surface::draw_text`] will use, without drawing anything.
pub trait Surface {
    fn fill_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: skia::Color);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: skia::Color, width: f32);
    /// Fill the closed polygon `outline` and stroke its border.
    fn fill_area(&mut self, outline: &[(f64, f64)], fill: skia::Color, stroke: skia::Color, width: f32);
    fn measure_text(&mut self, text: &str, size: f64) -> f64;
    /// Draw `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: skia::Color);
}

/// [`Surface`] over any Skia canvas (raster or SVG).
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    text: &'a TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: &'a TextShaper) -> Self {
        Self { canvas, text }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

impl Surface for SkiaSurface<'_> {
    fn fill_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        let rect = skia::Rect::from_ltrb(left as f32, top as f32, right as f32, bottom as f32);
        self.canvas.draw_rect(rect, &paint);
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: skia::Color, width: f32) {
        let paint = stroke_paint(color, width);
        self.canvas.draw_line(
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            &paint,
        );
    }

    fn fill_area(&mut self, outline: &[(f64, f64)], fill: skia::Color, stroke: skia::Color, width: f32) {
        let Some((&(x0, y0), rest)) = outline.split_first() else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to((x0 as f32, y0 as f32));
        for &(x, y) in rest {
            path.line_to((x as f32, y as f32));
        }
        path.close();

        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(fill);
        self.canvas.draw_path(&path, &body);
        self.canvas.draw_path(&path, &stroke_paint(stroke, width));
    }

    fn measure_text(&mut self, text: &str, size: f64) -> f64 {
        self.text.measure_width(text, size as f32) as f64
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: skia::Color) {
        self.text.draw_left(self.canvas, text, x as f32, y as f32, size as f32, color);
    }
}

/// One primitive captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect { left: f64, top: f64, right: f64, bottom: f64, color: skia::Color },
    Line { from: (f64, f64), to: (f64, f64), color: skia::Color, width: f32 },
    Area { outline: Vec<(f64, f64)>, fill: skia::Color, stroke: skia::Color },
    Text { text: String, x: f64, y: f64, size: f64, color: skia::Color },
}

/// [`Surface`] that only records what was drawn. Text is measured as
/// `0.5 · size` per character.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every string drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn areas(&self) -> Vec<&[(f64, f64)]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Area { outline, .. } => Some(outline.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn lines_colored(&self, color: skia::Color) -> Vec<((f64, f64), (f64, f64))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, color: c, .. } if *c == color => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: skia::Color) {
        self.ops.push(DrawOp::Rect { left, top, right, bottom, color });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: skia::Color, width: f32) {
        self.ops.push(DrawOp::Line { from, to, color, width });
    }

    fn fill_area(&mut self, outline: &[(f64, f64)], fill: skia::Color, stroke: skia::Color, _width: f32) {
        self.ops.push(DrawOp::Area { outline: outline.to_vec(), fill, stroke });
    }

    fn measure_text(&mut self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * 0.5
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: skia::Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), x, y, size, color });
    }
}
