// File: crates/burndown-core/tests/properties.rs
// Purpose: Property checks for parsing, the ideal decline and the date axis.

use burndown_core::{build_date_axis, build_series, compute_ideal_remaining, parse_remaining_work, BurndownInput};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn start_dates() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2100
    (0u64..36_500).prop_map(|d| NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(d))
}

proptest! {
    #[test]
    fn parse_keeps_count_and_order(values in prop::collection::vec(0u32..100_000, 0..40), pad in 0usize..3) {
        let spaces = " ".repeat(pad);
        let text = values
            .iter()
            .map(|v| format!("{spaces}{v}{spaces}"))
            .collect::<Vec<_>>()
            .join(",");
        let parsed = parse_remaining_work(&text).unwrap();
        let expected: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn ideal_is_a_straight_line_to_zero(total in 0.0f64..1e6, n in 2usize..200) {
        let ideal = compute_ideal_remaining(total, n);
        prop_assert_eq!(ideal.len(), n);
        prop_assert_eq!(ideal[0], total);
        let tol = 1e-9 * total.max(1.0);
        prop_assert!(ideal[n - 1].abs() <= tol);
        let step = -total / (n - 1) as f64;
        for w in ideal.windows(2) {
            prop_assert!((w[1] - w[0] - step).abs() <= tol);
        }
    }

    #[test]
    fn date_axis_is_gapless(start in start_dates(), n in 1usize..400) {
        let axis = build_date_axis(start, n);
        prop_assert_eq!(axis.len(), n);
        prop_assert_eq!(axis[0], start);
        for w in axis.windows(2) {
            prop_assert_eq!((w[1] - w[0]).num_days(), 1);
        }
    }

    #[test]
    fn series_lengths_always_agree(
        total in 0.0f64..1e4,
        remaining in prop::collection::vec(0.0f64..1e4, 0..60),
        start in start_dates(),
    ) {
        let input = BurndownInput::new(total, remaining.clone(), start).unwrap();
        let series = build_series(&input).unwrap();
        prop_assert_eq!(series.len(), remaining.len() + 1);
        prop_assert_eq!(series.actual().len(), series.len());
        prop_assert_eq!(series.ideal().len(), series.len());
        prop_assert_eq!(series.actual()[0], total);
        prop_assert_eq!(&series.actual()[1..], remaining.as_slice());
    }
}
