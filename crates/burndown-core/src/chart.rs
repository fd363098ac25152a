// File: crates/burndown-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use serde::Deserialize;
use skia_safe as skia;

use crate::axis::Axis;
use crate::burndown::BurndownSeries;
use crate::config::Labels;
use crate::error::{BurndownError, Result};
use crate::geometry::RectI32;
use crate::grid::{day_ticks, nice_step, value_ticks};
use crate::scale::{scales_for, DayScale, ValueScale};
use crate::series::{LineStyle, Series};
use crate::table::{LongForm, WorkKind};
use crate::text::TextShaper;
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 18.0;
const MARKER_RADIUS: f32 = 4.0;
const Y_TICK_TARGET: usize = 6;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Theme preset name; unknown names fall back to light.
    pub theme: String,
    /// chrono strftime pattern for date ticks.
    pub date_format: String,
    /// Counter-clockwise rotation of date tick labels, in degrees.
    pub tick_rotation: f32,
    /// Upper bound on date tick labels; longer spans label every n-th day.
    pub max_date_labels: usize,
    /// Off = geometry only (no text), used for deterministic snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: "light".into(),
            date_format: "%d-%b".into(),
            tick_rotation: 45.0,
            max_date_labels: 31,
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::new("X", 0.0, 1.0),
            y_axis: Axis::new("Y", 0.0, 1.0),
        }
    }

    /// Actual (solid) and ideal (dashed) lines over a date axis, autoscaled.
    /// Points come from the long-form table, one filter per work kind.
    pub fn burndown(series: &BurndownSeries, labels: &Labels) -> Self {
        let table = LongForm::from_series(series);
        let mut chart = Self::new(labels.title.clone());
        chart.x_axis = Axis::dates(labels.x_axis.clone(), table.start_date(), 0.0, 1.0);
        chart.y_axis = Axis::new(labels.y_axis.clone(), 0.0, 1.0);
        for kind in WorkKind::ALL {
            let style = match kind {
                WorkKind::Actual => LineStyle::Solid,
                WorkKind::Ideal => LineStyle::Dashed,
            };
            chart.add_series(Series::new(kind.label(labels), kind, style, table.points(kind)));
        }
        chart.autoscale();
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data.
    pub fn autoscale(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Render the chart to PNG-encoded bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let theme = theme::find(&opts.theme);
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| BurndownError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();

        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let view = ViewState {
            x_min: self.x_axis.min,
            x_max: self.x_axis.max,
            y_min: self.y_axis.min,
            y_max: self.y_axis.max,
        };
        let (xs, ys) = scales_for(&plot, &view);
        let x_ticks = day_ticks(view.x_min, view.x_max, opts.max_date_labels);
        let y_ticks = value_ticks(view.y_min, view.y_max, Y_TICK_TARGET);

        draw_grid(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, &theme);
        draw_axes(canvas, &plot, &theme);

        for s in &self.series {
            draw_line_series(canvas, &xs, &ys, s, &theme);
        }

        if opts.draw_labels {
            let text = TextShaper::new();
            draw_tick_labels(canvas, &text, &plot, &xs, &ys, &x_ticks, &y_ticks, self, opts, &theme);
            draw_titles(canvas, &text, &plot, self, opts, &theme);
            draw_legend(canvas, &text, &plot, &self.series, &theme);
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| BurndownError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn line_paint(style: LineStyle, color: skia::Color) -> skia::Paint {
    let mut paint = stroke_paint(color, 2.0);
    if style == LineStyle::Dashed {
        paint.set_path_effect(skia::PathEffect::dash(&[10.0, 6.0], 0.0));
    }
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &DayScale,
    ys: &ValueScale,
    x_ticks: &[i64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &fill_paint(theme.plot_background));

    let paint = stroke_paint(theme.grid, 1.0);
    for &d in x_ticks {
        let x = xs.to_px(d as f64);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_line_series(canvas: &skia::Canvas, xs: &DayScale, ys: &ValueScale, series: &Series, theme: &Theme) {
    let data = &series.data_xy;
    let Some(&(x0, y0)) = data.first() else { return };
    let color = theme.stroke_for(series.kind);

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to((xs.to_px(x0), ys.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((xs.to_px(x), ys.to_px(y)));
        }
        canvas.draw_path(&path, &line_paint(series.style, color));
    }

    // A lone point still shows up through its marker.
    if series.markers {
        let marker = fill_paint(color);
        for &(x, y) in data {
            canvas.draw_circle((xs.to_px(x), ys.to_px(y)), MARKER_RADIUS, &marker);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &RectI32,
    xs: &DayScale,
    ys: &ValueScale,
    x_ticks: &[i64],
    y_ticks: &[f64],
    chart: &Chart,
    opts: &RenderOptions,
    theme: &Theme,
) {
    let tick_paint = stroke_paint(theme.tick, 1.0);
    let b = plot.bottom as f32;
    for &d in x_ticks {
        let x = xs.to_px(d as f64);
        canvas.draw_line((x, b), (x, b + 5.0), &tick_paint);
        let label = chart.x_axis.tick_label(d as f64, 1.0, &opts.date_format);
        text.draw_rotated(canvas, &label, x, b + 14.0, opts.tick_rotation, 1.0, TICK_FONT, theme.axis_label);
    }

    let l = plot.left as f32;
    let y_step = nice_step(chart.y_axis.max - chart.y_axis.min, Y_TICK_TARGET);
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((l - 5.0, y), (l, y), &tick_paint);
        let label = chart.y_axis.tick_label(v, y_step, &opts.date_format);
        let w = text.measure_width(&label, TICK_FONT);
        text.draw_left(canvas, &label, l - 8.0 - w, y + TICK_FONT * 0.35, TICK_FONT, theme.axis_label);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &RectI32,
    chart: &Chart,
    opts: &RenderOptions,
    theme: &Theme,
) {
    let cx = (plot.left + plot.right) as f32 * 0.5;
    let cy = (plot.top + plot.bottom) as f32 * 0.5;
    text.draw_centered(canvas, &chart.title, cx, plot.top as f32 - 20.0, TITLE_FONT, theme.axis_label);
    text.draw_centered(canvas, &chart.x_axis.label, cx, opts.height as f32 - 12.0, LABEL_FONT, theme.axis_label);
    text.draw_rotated(canvas, &chart.y_axis.label, plot.left as f32 - 56.0, cy, 90.0, 0.5, LABEL_FONT, theme.axis_label);
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, plot: &RectI32, series: &[Series], theme: &Theme) {
    if series.is_empty() { return; }
    let row_h = 22.0f32;
    let sample_w = 36.0f32;
    let pad = 10.0f32;
    let text_w = series
        .iter()
        .map(|s| text.measure_width(&s.label, LABEL_FONT))
        .fold(0.0f32, f32::max);
    let box_w = pad * 3.0 + sample_w + text_w;
    let box_h = pad * 2.0 + row_h * series.len() as f32;
    let right = plot.right as f32 - pad;
    let top = plot.top as f32 + pad;
    let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);
    canvas.draw_rect(rect, &fill_paint(theme.legend_background));
    canvas.draw_rect(rect, &stroke_paint(theme.grid, 1.0));

    for (i, s) in series.iter().enumerate() {
        let color = theme.stroke_for(s.kind);
        let y = top + pad + row_h * (i as f32 + 0.5);
        let x0 = rect.left + pad;
        canvas.draw_line((x0, y), (x0 + sample_w, y), &line_paint(s.style, color));
        if s.markers {
            canvas.draw_circle((x0 + sample_w * 0.5, y), MARKER_RADIUS, &fill_paint(color));
        }
        text.draw_left(canvas, &s.label, x0 + sample_w + pad, y + LABEL_FONT * 0.35, LABEL_FONT, theme.axis_label);
    }
}
