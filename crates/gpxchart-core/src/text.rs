// File: crates/gpxchart-core/src/text.rs
// Summary: Label text shaper/renderer using Skia textlayout, backed by the resolved font source.

use skia_safe as skia;
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle, TypefaceFontProvider,
};

use crate::font::{FontSource, FONT_FAMILY};

const FAMILIES: [&str; 5] = [FONT_FAMILY, "Luxi Serif", "DejaVu Serif", "Times New Roman", "serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new(source: &FontSource) -> Self {
        let mut fc = FontCollection::new();
        if let Some(typeface) = source.data().and_then(|bytes| skia::FontMgr::new().new_from_data(bytes, None)) {
            let mut provider = TypefaceFontProvider::new();
            provider.register_typeface(typeface, Some(FONT_FAMILY));
            let assets: skia::FontMgr = provider.into();
            fc.set_asset_font_manager(Some(assets));
        }
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&FAMILIES);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the laid-out text, without drawing anything.
    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` with its baseline starting at `(x, y)`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }
}
