// File: crates/burndown-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; left, centered and rotated placement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Families with broad Latin/Cyrillic coverage first; labels are user-configurable.
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        p.longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw horizontally centred on `cx`, baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        p.paint(canvas, (cx - w * 0.5, y - size * 0.8));
    }

    /// Draw rotated counter-clockwise by `degrees` around (`x`, `y`).
    /// `anchor` is the fraction of the text width that lands on the point:
    /// 0.0 starts there, 0.5 centres, 1.0 ends there.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        degrees: f32,
        anchor: f32,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        p.paint(canvas, (-w * anchor, -size * 0.5));
        canvas.restore();
    }
}
