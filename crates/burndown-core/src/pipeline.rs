// File: crates/burndown-core/src/pipeline.rs
// Summary: One submit action: collect -> validate -> compute -> shape -> render.

use tracing::{debug, warn};

use crate::burndown::{build_series, BurndownSeries};
use crate::chart::Chart;
use crate::config::BurndownConfig;
use crate::error::Result;
use crate::io::{ChartSink, InputSource};

/// Run once and hand the chart to `sink`. Nothing reaches the sink on error.
/// Returns the series so callers can export the table alongside the chart.
pub fn generate<S, K>(source: &S, sink: &mut K, config: &BurndownConfig) -> Result<BurndownSeries>
where
    S: InputSource + ?Sized,
    K: ChartSink + ?Sized,
{
    let input = source.read_input()?;
    debug!(
        total_work = input.total_work(),
        measurements = input.remaining().len(),
        start = %input.start_date(),
        "read burndown input"
    );

    let series = build_series(&input)?;
    if series.is_single_point() {
        warn!("no remaining-work measurements yet; chart shows only the starting total");
    }

    let chart = Chart::burndown(&series, &config.labels);
    sink.present(&chart, &config.render)?;
    Ok(series)
}
