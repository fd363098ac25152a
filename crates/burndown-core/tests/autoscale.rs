// File: crates/burndown-core/tests/autoscale.rs
// Purpose: Validate autoscale of burndown charts (date span, zero floor, headroom).

use burndown_core::{build_series, BurndownInput, Chart, Labels};
use chrono::NaiveDate;

fn chart_for(total: f64, remaining: Vec<f64>) -> Chart {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let input = BurndownInput::new(total, remaining, start).unwrap();
    Chart::burndown(&build_series(&input).unwrap(), &Labels::default())
}

#[test]
fn autoscale_covers_all_days_and_zero() {
    let chart = chart_for(100.0, vec![50.0, 20.0, 10.0, 5.0, 0.0]);

    // X spans day 0..5 with a little margin
    assert!(chart.x_axis.min < 0.0);
    assert!(chart.x_axis.max > 5.0);
    assert!(chart.x_axis.max < 6.0);

    // Y from zero to just above the total
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max > 100.0);
}

#[test]
fn autoscale_includes_scope_growth_above_total() {
    let chart = chart_for(20.0, vec![30.0, 10.0]);
    assert!(chart.y_axis.max >= 30.0);
}

#[test]
fn autoscale_flat_zero_chart() {
    let chart = chart_for(0.0, Vec::new());
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max > 0.0);
    assert!(chart.x_axis.min < 0.0 && chart.x_axis.max > 0.0);
}
