// File: crates/burndown-core/src/grid.rs
// Summary: Tick layout helpers for value and day axes.

/// "Nice" tick step (1, 2, 2.5 or 5 times a power of ten) giving roughly
/// `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span.is_nan() || span <= 0.0 || target == 0 { return 1.0; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Decimals needed to print multiples of `step` without collapsing
/// neighbours: one per negative power of ten, plus one for a 2.5 mantissa.
pub fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 { return 0; }
    let exp = (step.log10() + 1e-9).floor() as i32;
    let mantissa = step / 10f64.powi(exp);
    let mut decimals = (-exp).max(0) as usize;
    if exp <= 0 && (mantissa - 2.5).abs() < 1e-6 { decimals += 1; }
    decimals
}

/// Multiples of a nice step that fall inside `[min, max]`.
pub fn value_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Whole-day offsets inside `[min, max]`, thinned to every `stride`-th day so
/// that at most `max_labels` remain.
pub fn day_ticks(min: f64, max: f64, max_labels: usize) -> Vec<i64> {
    let first = min.ceil() as i64;
    let last = max.floor() as i64;
    if last < first { return Vec::new(); }
    let count = (last - first + 1) as usize;
    let stride = count.div_ceil(max_labels.max(1)).max(1);
    (first..=last).step_by(stride).collect()
}
