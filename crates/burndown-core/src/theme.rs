// File: crates/burndown-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

use crate::table::WorkKind;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub actual_stroke: skia::Color,
    pub ideal_stroke: skia::Color,
    pub legend_background: skia::Color,
}

impl Theme {
    /// White-grid look: light plot area, blue actual line, red ideal line.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 220, 220, 225),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 90, 90, 100),
            actual_stroke: skia::Color::from_argb(255, 31, 119, 180),
            ideal_stroke: skia::Color::from_argb(255, 214, 39, 40),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            actual_stroke: skia::Color::from_argb(255, 64, 160, 255),
            ideal_stroke: skia::Color::from_argb(255, 240, 90, 90),
            legend_background: skia::Color::from_argb(220, 30, 30, 34),
        }
    }

    pub fn stroke_for(&self, kind: WorkKind) -> skia::Color {
        match kind {
            WorkKind::Actual => self.actual_stroke,
            WorkKind::Ideal => self.ideal_stroke,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
