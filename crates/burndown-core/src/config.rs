// File: crates/burndown-core/src/config.rs
// Summary: Process-wide immutable configuration: static labels, input defaults, render options.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::chart::RenderOptions;
use crate::error::Result;

/// Environment variable prefix, e.g. `BURNDOWN_LABELS__TITLE`.
pub const ENV_PREFIX: &str = "BURNDOWN";

/// Static strings shown on the chart and in exported tables.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub actual: String,
    pub ideal: String,
    /// Header of the series-kind column in the long-form table.
    pub kind: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "SYNERGY Burndown Chart".into(),
            x_axis: "Date".into(),
            y_axis: "Remaining work".into(),
            actual: "Actual remaining work".into(),
            ideal: "Ideal remaining work".into(),
            kind: "Work type".into(),
        }
    }
}

/// Initial form values, used for any input the caller does not supply.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputDefaults {
    pub total_work: f64,
    pub remaining_work: String,
    pub start_date: NaiveDate,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            total_work: 100.0,
            remaining_work: "50,20,10,5,0".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap_or_default(),
        }
    }
}

/// Built once at startup and only ever shared by reference.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct BurndownConfig {
    pub labels: Labels,
    pub defaults: InputDefaults,
    pub render: RenderOptions,
}

impl BurndownConfig {
    /// Layer built-in defaults, an optional config file (format from its
    /// extension) and `BURNDOWN_*` environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        Ok(builder.build()?.try_deserialize()?)
    }
}
