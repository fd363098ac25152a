// File: crates/burndown-core/src/io.rs
// Summary: Capability seams between the series builder and whatever collects input or shows charts.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::burndown::{parse_remaining_work, BurndownInput};
use crate::chart::{Chart, RenderOptions};
use crate::config::InputDefaults;
use crate::error::Result;

/// Yields one validated input per run, or the validation error to show the user.
pub trait InputSource {
    fn read_input(&self) -> Result<BurndownInput>;
}

/// Accepts a finished chart description plus render options.
pub trait ChartSink {
    fn present(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()>;
}

/// Raw form values, exactly as a user typed them.
#[derive(Clone, Debug, PartialEq)]
pub struct RawInput {
    pub total_work: f64,
    pub remaining_work: String,
    pub start_date: NaiveDate,
}

impl RawInput {
    pub fn from_defaults(defaults: &InputDefaults) -> Self {
        Self {
            total_work: defaults.total_work,
            remaining_work: defaults.remaining_work.clone(),
            start_date: defaults.start_date,
        }
    }
}

impl InputSource for RawInput {
    fn read_input(&self) -> Result<BurndownInput> {
        let remaining = parse_remaining_work(&self.remaining_work)?;
        BurndownInput::new(self.total_work, remaining, self.start_date)
    }
}

/// Renders each presented chart to a PNG file.
#[derive(Clone, Debug)]
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl ChartSink for PngFileSink {
    fn present(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()> {
        chart.render_to_png(opts, &self.path)?;
        info!(path = %self.path.display(), width = opts.width, height = opts.height, "wrote chart");
        Ok(())
    }
}
