// File: crates/burndown-core/src/scale.rs
// Summary: Day (X) and value (Y) scale transforms from logical coordinates to pixels.

use crate::geometry::RectI32;
use crate::view::ViewState;

/// Logical X coordinate: day offset from the chart's start date.
pub type Logical = f64;
/// Value Y coordinate: remaining work.
pub type Value = f64;

/// Horizontal scale mapping `[x_min, x_max]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct DayScale {
    pub left_px: f32,
    pub right_px: f32,
    pub x_min: Logical,
    pub x_max: Logical,
}

impl DayScale {
    pub fn new(left_px: f32, right_px: f32, x_min: Logical, mut x_max: Logical) -> Self {
        if (x_max - x_min).abs() < 1e-12 { x_max = x_min + 1.0; }
        Self { left_px, right_px, x_min, x_max }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        let span = self.x_max - self.x_min;
        self.left_px + ((x - self.x_min) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Both scales for a plot rect and view.
pub fn scales_for(plot: &RectI32, view: &ViewState) -> (DayScale, ValueScale) {
    (
        DayScale::new(plot.left as f32, plot.right as f32, view.x_min, view.x_max),
        ValueScale::new_linear(plot.top as f32, plot.bottom as f32, view.y_min, view.y_max),
    )
}
