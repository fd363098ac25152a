// File: crates/burndown-core/src/view.rs
// Visible ranges derived from chart data (autoscale).

use crate::Chart;

/// Fraction of the data span added on each side of the X range.
const X_MARGIN: f64 = 0.04;
/// Fraction of the data span added above the Y maximum.
const Y_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit all series. Y always includes zero, the line every burndown aims for.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = 0.0f64;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }

        let x_span = x_max - x_min;
        let (x_min, x_max) = if x_span < 1e-9 {
            (x_min - 0.5, x_max + 0.5)
        } else {
            (x_min - x_span * X_MARGIN, x_max + x_span * X_MARGIN)
        };

        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let y_max = y_max + (y_max - y_min) * Y_MARGIN;

        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
