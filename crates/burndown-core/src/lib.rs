// File: crates/burndown-core/src/lib.rs
// Summary: Core library entry point; burndown series building, long-form shaping and chart rendering.

pub mod burndown;
pub mod table;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;

pub use burndown::{
    build_date_axis, build_series, compute_ideal_remaining, parse_remaining_work, BurndownInput,
    BurndownSeries,
};
pub use table::{LongForm, LongFormRow, WorkKind};
pub use config::{BurndownConfig, InputDefaults, Labels};
pub use error::BurndownError;
pub use io::{ChartSink, InputSource, PngFileSink, RawInput};
pub use pipeline::generate;
pub use chart::{Chart, RenderOptions};
pub use series::{LineStyle, Series};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
