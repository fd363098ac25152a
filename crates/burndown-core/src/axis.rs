// File: crates/burndown-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick formatting (plain values or calendar days).

use chrono::{Duration, NaiveDate};

use crate::grid::step_decimals;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Value,
    /// Logical coordinates are whole-day offsets from `origin`.
    Date { origin: NaiveDate },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: AxisKind::Value }
    }

    pub fn dates(label: impl Into<String>, origin: NaiveDate, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: AxisKind::Date { origin } }
    }

    /// Text for a tick at logical coordinate `v`. Value axes print as many
    /// decimals as the tick `step` needs; date axes use the chrono strftime
    /// pattern `date_format`.
    pub fn tick_label(&self, v: f64, step: f64, date_format: &str) -> String {
        match self.kind {
            AxisKind::Value => format!("{:.*}", step_decimals(step), v),
            AxisKind::Date { origin } => origin
                .checked_add_signed(Duration::days(v.round() as i64))
                .map(|d| d.format(date_format).to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{nice_step, value_ticks};

    #[test]
    fn date_ticks_are_day_month() {
        let origin = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let axis = Axis::dates("Date", origin, 0.0, 5.0);
        assert_eq!(axis.tick_label(0.0, 1.0, "%d-%b"), "01-Sep");
        assert_eq!(axis.tick_label(5.0, 1.0, "%d-%b"), "06-Sep");
        assert_eq!(axis.tick_label(30.0, 1.0, "%d-%b"), "01-Oct");
    }

    #[test]
    fn whole_steps_print_integers() {
        let axis = Axis::new("Remaining", 0.0, 100.0);
        assert_eq!(axis.tick_label(40.0, 20.0, ""), "40");
        assert_eq!(axis.tick_label(2.5, 2.5, ""), "2.5");
    }

    fn labels_for(total: f64) -> Vec<String> {
        let axis = Axis::new("Remaining", 0.0, total * 1.05);
        let step = nice_step(axis.max - axis.min, 6);
        value_ticks(axis.min, axis.max, 6)
            .into_iter()
            .map(|v| axis.tick_label(v, step, ""))
            .collect()
    }

    #[test]
    fn quarter_steps_keep_two_decimals() {
        assert_eq!(labels_for(1.4), vec!["0.00", "0.25", "0.50", "0.75", "1.00", "1.25"]);
    }

    #[test]
    fn hundredth_steps_stay_distinct() {
        let labels = labels_for(0.05);
        assert_eq!(labels, vec!["0.00", "0.01", "0.02", "0.03", "0.04", "0.05"]);
    }
}
