// File: crates/burndown-cli/src/main.rs
// Summary: Renders one burndown chart from CLI flags (falling back to configured defaults) to PNG, optionally CSV.

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use burndown_core::{generate, BurndownConfig, BurndownSeries, Labels, LongForm, PngFileSink};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args, "parsed arguments");

    let loaded = BurndownConfig::load(args.config.as_deref())
        .with_context(|| match &args.config {
            Some(p) => format!("failed to load config '{}'", p.display()),
            None => "failed to load config from environment".to_string(),
        })?;
    let config = args.apply_overrides(loaded);

    let source = args.raw_input(&config.defaults);
    let mut sink = PngFileSink::new(&args.output);

    let series = generate(&source, &mut sink, &config)
        .with_context(|| format!("no chart written to '{}'", args.output.display()))?;

    if series.is_single_point() {
        println!("No remaining-work measurements yet; chart shows the starting total only.");
    }
    println!("Wrote {}", sink.path().display());

    if let Some(table_path) = &args.table {
        write_table(table_path, &series, &config.labels)?;
        println!("Wrote {}", table_path.display());
    }

    Ok(())
}

/// Long-form CSV next to the chart, creating missing directories.
fn write_table(path: &Path, series: &BurndownSeries, labels: &Labels) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    LongForm::from_series(series)
        .write_csv(file, labels)
        .with_context(|| format!("writing {}", path.display()))
}
