// File: crates/burndown-core/src/error.rs
// Summary: Error type shared by the series builder, config loader and renderer.

use thiserror::Error;

/// Every failure a burndown run can hit. All of them are terminal for the run:
/// the caller reports the message and produces no chart.
#[derive(Debug, Error)]
pub enum BurndownError {
    /// A remaining-work token is not a finite decimal number.
    #[error("remaining work must be comma-separated numbers; token {position} (`{token}`) is not a number")]
    Parse { token: String, position: usize },

    /// Dates, actual and ideal series disagree in length.
    #[error("series length mismatch: expected {expected} points, got {dates} dates, {actual} actual, {ideal} ideal")]
    LengthMismatch {
        expected: usize,
        dates: usize,
        actual: usize,
        ideal: usize,
    },

    #[error("total work must be a finite number >= 0, got {0}")]
    InvalidTotalWork(f64),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = BurndownError> = std::result::Result<T, E>;
