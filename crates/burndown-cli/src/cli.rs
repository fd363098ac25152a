// File: crates/burndown-cli/src/cli.rs
// Summary: Command-line arguments standing in for the input form; absent flags fall back to config.

use std::path::PathBuf;

use burndown_core::{BurndownConfig, InputDefaults, RawInput};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render a burndown chart (actual vs ideal remaining work) to PNG", long_about = None)]
pub struct Cli {
    /// Total amount of work at the start date
    #[arg(long, allow_negative_numbers = true)]
    pub total_work: Option<f64>,

    /// Remaining work after each day, comma-separated (e.g. "50,20,10,5,0")
    #[arg(long, allow_hyphen_values = true)]
    pub remaining: Option<String>,

    /// First day of the chart (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Config file with labels, defaults and render options (TOML, JSON, YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the chart
    #[arg(long, short, default_value = "target/out/burndown.png")]
    pub output: PathBuf,

    /// Also write the long-form table as CSV
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Theme preset (light, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<i32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<i32>,
}

impl Cli {
    /// Form values: flags where given, configured defaults otherwise.
    pub fn raw_input(&self, defaults: &InputDefaults) -> RawInput {
        let mut raw = RawInput::from_defaults(defaults);
        if let Some(total) = self.total_work { raw.total_work = total; }
        if let Some(remaining) = &self.remaining { raw.remaining_work = remaining.clone(); }
        if let Some(start) = self.start_date { raw.start_date = start; }
        raw
    }

    /// Fold render flags into the loaded config before it is frozen for the run.
    pub fn apply_overrides(&self, mut config: BurndownConfig) -> BurndownConfig {
        if let Some(theme) = &self.theme { config.render.theme = theme.clone(); }
        if let Some(w) = self.width { config.render.width = w; }
        if let Some(h) = self.height { config.render.height = h; }
        config
    }
}
