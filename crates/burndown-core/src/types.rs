// File: crates/burndown-core/src/types.rs
// Summary: Shared sizes and paddings for the rendered chart.

use serde::Deserialize;

/// Default surface width in pixels (a 10in figure at 100 dpi).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Screen margins around the plot area, in pixels.
/// The bottom inset leaves room for rotated date labels and the x-axis title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 32, 56, 96)
    }
}
