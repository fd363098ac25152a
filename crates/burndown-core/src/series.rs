// File: crates/burndown-core/src/series.rs
// Summary: Drawable line series (points, stroke style, markers) for the burndown chart.

use crate::table::WorkKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    /// Picks the stroke color from the theme.
    pub kind: WorkKind,
    pub style: LineStyle,
    pub markers: bool,
    pub data_xy: Vec<(f64, f64)>, // (day offset, remaining)
}

impl Series {
    pub fn new(label: impl Into<String>, kind: WorkKind, style: LineStyle, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), kind, style, markers: true, data_xy: data }
    }
}
