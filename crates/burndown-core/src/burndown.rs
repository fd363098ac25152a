// File: crates/burndown-core/src/burndown.rs
// Summary: Burndown series builder: input validation, date axis, ideal decline and aligned series.
// Notes:
// - Everything here is pure; rendering and input collection live behind `io`.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::{BurndownError, Result};

/// Validated inputs for one burndown run.
/// Contract: `total_work` is finite and non-negative; `remaining` holds one
/// measurement per period after `start_date`.
#[derive(Clone, Debug, PartialEq)]
pub struct BurndownInput {
    total_work: f64,
    remaining: Vec<f64>,
    start_date: NaiveDate,
}

impl BurndownInput {
    pub fn new(total_work: f64, remaining: Vec<f64>, start_date: NaiveDate) -> Result<Self> {
        if !total_work.is_finite() || total_work < 0.0 {
            return Err(BurndownError::InvalidTotalWork(total_work));
        }
        Ok(Self { total_work, remaining, start_date })
    }

    pub fn total_work(&self) -> f64 { self.total_work }
    pub fn remaining(&self) -> &[f64] { &self.remaining }
    pub fn start_date(&self) -> NaiveDate { self.start_date }

    /// Number of points on the chart: the starting total plus one per measurement.
    pub fn period_count(&self) -> usize { self.remaining.len() + 1 }
}

/// Aligned actual/ideal series over a shared date axis.
/// Invariant: `dates`, `actual` and `ideal` have equal length (>= 1).
#[derive(Clone, Debug, PartialEq)]
pub struct BurndownSeries {
    dates: Vec<NaiveDate>,
    actual: Vec<f64>,
    ideal: Vec<f64>,
}

impl BurndownSeries {
    pub fn dates(&self) -> &[NaiveDate] { &self.dates }
    pub fn actual(&self) -> &[f64] { &self.actual }
    pub fn ideal(&self) -> &[f64] { &self.ideal }
    pub fn len(&self) -> usize { self.dates.len() }
    pub fn is_empty(&self) -> bool { self.dates.is_empty() }

    /// True when only the starting total is present (no measurements yet).
    pub fn is_single_point(&self) -> bool { self.dates.len() == 1 }
}

/// Parse the comma-separated remaining-work field.
///
/// Tokens are trimmed and empty ones dropped, so `"50, 20,,10"` yields three
/// values. Non-finite values (`nan`, `inf`) are rejected like any other
/// malformed token.
pub fn parse_remaining_work(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(i, token)| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(BurndownError::Parse { token: token.to_string(), position: i + 1 }),
        })
        .collect()
}

/// `period_count` consecutive calendar days starting at `start` (inclusive).
/// Stops short only if the calendar runs out.
pub fn build_date_axis(start: NaiveDate, period_count: usize) -> Vec<NaiveDate> {
    (0..period_count as u64)
        .map_while(|i| start.checked_add_days(Days::new(i)))
        .collect()
}

/// Straight-line decline from `total_work` to zero over `period_count` points.
pub fn compute_ideal_remaining(total_work: f64, period_count: usize) -> Vec<f64> {
    match period_count {
        0 => Vec::new(),
        1 => vec![total_work],
        n => {
            let step = total_work / (n - 1) as f64;
            (0..n).map(|i| total_work - step * i as f64).collect()
        }
    }
}

/// Build the aligned series for one run.
pub fn build_series(input: &BurndownInput) -> Result<BurndownSeries> {
    let period_count = input.period_count();
    let dates = build_date_axis(input.start_date, period_count);

    let mut actual = Vec::with_capacity(period_count);
    actual.push(input.total_work);
    actual.extend_from_slice(&input.remaining);

    let ideal = compute_ideal_remaining(input.total_work, period_count);

    if dates.len() != period_count || actual.len() != period_count || ideal.len() != period_count {
        return Err(BurndownError::LengthMismatch {
            expected: period_count,
            dates: dates.len(),
            actual: actual.len(),
            ideal: ideal.len(),
        });
    }

    debug!(period_count, start = %input.start_date, "built burndown series");
    Ok(BurndownSeries { dates, actual, ideal })
}
