// File: crates/burndown-core/src/table.rs
// Summary: Long-form (melted) view of a burndown series and its CSV export.

use std::io::Write;

use chrono::NaiveDate;

use crate::burndown::BurndownSeries;
use crate::config::Labels;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkKind {
    Actual,
    Ideal,
}

impl WorkKind {
    pub const ALL: [WorkKind; 2] = [WorkKind::Actual, WorkKind::Ideal];

    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            WorkKind::Actual => &labels.actual,
            WorkKind::Ideal => &labels.ideal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongFormRow {
    pub date: NaiveDate,
    pub kind: WorkKind,
    pub remaining: f64,
}

/// One row per (date, kind) observation: all actual rows in date order,
/// then all ideal rows in date order.
#[derive(Clone, Debug, PartialEq)]
pub struct LongForm {
    start: NaiveDate,
    rows: Vec<LongFormRow>,
}

impl LongForm {
    pub fn from_series(series: &BurndownSeries) -> Self {
        let dates = series.dates();
        let start = dates.first().copied().unwrap_or_default();
        let mut rows = Vec::with_capacity(dates.len() * 2);
        for kind in WorkKind::ALL {
            let values = match kind {
                WorkKind::Actual => series.actual(),
                WorkKind::Ideal => series.ideal(),
            };
            rows.extend(
                dates
                    .iter()
                    .zip(values)
                    .map(|(&date, &remaining)| LongFormRow { date, kind, remaining }),
            );
        }
        Self { start, rows }
    }

    pub fn rows(&self) -> &[LongFormRow] { &self.rows }

    pub fn start_date(&self) -> NaiveDate { self.start }

    /// `(day offset from start, remaining)` pairs for one kind, in date order.
    pub fn points(&self, kind: WorkKind) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| ((r.date - self.start).num_days() as f64, r.remaining))
            .collect()
    }

    /// Write the table as CSV with the configured column headers.
    pub fn write_csv<W: Write>(&self, writer: W, labels: &Labels) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([labels.x_axis.as_str(), labels.kind.as_str(), labels.y_axis.as_str()])?;
        for row in &self.rows {
            let date = row.date.format("%Y-%m-%d").to_string();
            let value = row.remaining.to_string();
            wtr.write_record([date.as_str(), row.kind.label(labels), value.as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
