// File: crates/burndown-core/tests/render_pixels.rs
// Purpose: Pixel checks on label-free renders: markers, series colors, solid vs dashed strokes.

use burndown_core::geometry::RectI32;
use burndown_core::scale::scales_for;
use burndown_core::{build_series, BurndownInput, Chart, Labels, RenderOptions, Theme, ViewState};
use chrono::NaiveDate;
use image::RgbaImage;
use skia_safe::Color;

fn chart_for(total: f64, remaining: Vec<f64>) -> Chart {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).expect("date");
    let input = BurndownInput::new(total, remaining, start).expect("input");
    Chart::burndown(&build_series(&input).expect("series"), &Labels::default())
}

fn geometry_only() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

fn render(chart: &Chart, opts: &RenderOptions) -> RgbaImage {
    let bytes = chart.render_to_png_bytes(opts).expect("render bytes");
    image::load_from_memory(&bytes).expect("decode png").to_rgba8()
}

/// Pixel position of logical point (day, remaining), as the renderer maps it.
fn to_px(chart: &Chart, opts: &RenderOptions, day: f64, remaining: f64) -> (f32, f32) {
    let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
    let view = ViewState {
        x_min: chart.x_axis.min,
        x_max: chart.x_axis.max,
        y_min: chart.y_axis.min,
        y_max: chart.y_axis.max,
    };
    let (xs, ys) = scales_for(&plot, &view);
    (xs.to_px(day), ys.to_px(remaining))
}

fn rgb(c: Color) -> [u8; 3] {
    [c.r(), c.g(), c.b()]
}

fn pixel(img: &RgbaImage, x: i64, y: i64) -> [u8; 3] {
    let p = img.get_pixel(x as u32, y as u32).0;
    [p[0], p[1], p[2]]
}

fn neighbourhood(x: f32, y: f32) -> impl Iterator<Item = (i64, i64)> {
    let (cx, cy) = (x.floor() as i64, y.floor() as i64);
    (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| (cx + dx, cy + dy)))
}

fn bluish(p: [u8; 3]) -> bool {
    p[2] > 150 && p[0] < 120
}

fn reddish(p: [u8; 3]) -> bool {
    p[0] > 150 && p[1] < 120
}

fn any_near(img: &RgbaImage, (x, y): (f32, f32), test: fn([u8; 3]) -> bool) -> bool {
    neighbourhood(x, y).any(|(px, py)| test(pixel(img, px, py)))
}

/// Background or grid only around (x, y).
fn blank_near(img: &RgbaImage, (x, y): (f32, f32)) -> bool {
    neighbourhood(x, y).all(|(px, py)| pixel(img, px, py).iter().all(|&c| c > 180))
}

/// Points along the segment between two logical points, clear of the end markers.
fn along(chart: &Chart, opts: &RenderOptions, from: (f64, f64), to: (f64, f64)) -> Vec<(f32, f32)> {
    (15..=85)
        .map(|i| {
            let t = i as f64 / 100.0;
            let day = from.0 + (to.0 - from.0) * t;
            let value = from.1 + (to.1 - from.1) * t;
            to_px(chart, opts, day, value)
        })
        .collect()
}

#[test]
fn single_point_draws_its_marker() {
    let chart = chart_for(0.0, Vec::new());
    let opts = geometry_only();
    let img = render(&chart, &opts);

    let (x, y) = to_px(&chart, &opts, 0.0, 0.0);
    // Ideal is drawn last, so its marker covers the actual one.
    assert_eq!(pixel(&img, x.floor() as i64, y.floor() as i64), rgb(Theme::light().ideal_stroke));
}

#[test]
fn both_series_colors_reach_the_plot() {
    let chart = chart_for(100.0, vec![50.0, 20.0, 10.0, 5.0, 0.0]);
    let opts = geometry_only();
    let img = render(&chart, &opts);
    let theme = Theme::light();

    // Days 1..=4 are where the two series part ways.
    for (day, value) in [(1.0, 50.0), (2.0, 20.0), (3.0, 10.0), (4.0, 5.0)] {
        let (x, y) = to_px(&chart, &opts, day, value);
        assert_eq!(pixel(&img, x.floor() as i64, y.floor() as i64), rgb(theme.actual_stroke), "actual marker, day {day}");
    }
    for (day, value) in [(1.0, 80.0), (2.0, 60.0), (3.0, 40.0), (4.0, 20.0)] {
        let (x, y) = to_px(&chart, &opts, day, value);
        assert_eq!(pixel(&img, x.floor() as i64, y.floor() as i64), rgb(theme.ideal_stroke), "ideal marker, day {day}");
    }
}

#[test]
fn actual_is_solid_and_ideal_is_dashed() {
    let chart = chart_for(100.0, vec![50.0, 20.0, 10.0, 5.0, 0.0]);
    let opts = geometry_only();
    let img = render(&chart, &opts);

    let solid = along(&chart, &opts, (1.0, 50.0), (2.0, 20.0));
    assert!(solid.iter().all(|&p| any_near(&img, p, bluish)), "actual line has gaps");

    let dashed = along(&chart, &opts, (1.0, 80.0), (2.0, 60.0));
    let inked = dashed.iter().filter(|&&p| any_near(&img, p, reddish)).count();
    let gaps = dashed.iter().filter(|&&p| blank_near(&img, p)).count();
    assert!(inked > 0, "ideal line not drawn");
    assert!(gaps > 0, "ideal line should be dashed");
}
