//! Chart Renderer
//!
//! Trend charts drawn on HTML5 Canvas. Each render disposes the previous
//! chart handle for the target canvas, then installs a new one that owns the
//! entrance-animation ticker. Missing canvas or missing data is a silent
//! no-op.

use gloo_timers::callback::Interval;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::charts::ChartHandle;
use crate::state::global::{GlobalState, Series, Tab};

/// Entrance animation duration
const ANIMATION_MS: f64 = 1000.0;
/// Ticker period, roughly one frame at 60 Hz
const FRAME_MS: u32 = 16;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Per-dataset display options
#[derive(Clone)]
pub struct DatasetOptions {
    pub label: String,
    pub color: String,
    pub unit: String,
}

/// A chart bound to one canvas, animating its entrance.
///
/// The interval ticker holds a clone of the `ticker` cell, so `Drop` must
/// take the interval out explicitly to cancel it.
pub struct CanvasChart {
    canvas_id: String,
    ticker: Rc<RefCell<Option<Interval>>>,
}

impl CanvasChart {
    fn start(canvas_id: &str, kind: ChartKind, series: Series, options: DatasetOptions) -> Self {
        let ticker = Rc::new(RefCell::new(None));
        let started = js_sys::Date::now();

        let id = canvas_id.to_string();
        let ticker_in_tick = Rc::clone(&ticker);
        let interval = Interval::new(FRAME_MS, move || {
            let progress = ((js_sys::Date::now() - started) / ANIMATION_MS).min(1.0);
            draw(&id, kind, &series, &options, ease_in_out_quad(progress));
            if progress >= 1.0 {
                // final frame drawn, stop ticking
                ticker_in_tick.borrow_mut().take();
            }
        });
        *ticker.borrow_mut() = Some(interval);

        Self {
            canvas_id: canvas_id.to_string(),
            ticker,
        }
    }
}

impl ChartHandle for CanvasChart {
    fn canvas_id(&self) -> &str {
        &self.canvas_id
    }
}

impl Drop for CanvasChart {
    fn drop(&mut self) {
        // cancels the interval if the animation is still running
        self.ticker.borrow_mut().take();
    }
}

/// Canvas element for one overview tab
#[component]
pub fn TrendCanvas(tab: Tab) -> impl IntoView {
    view! {
        <canvas
            id=tab.canvas_id()
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Render a chart onto the canvas with the given id.
///
/// Disposes any chart currently bound to that canvas first. No-ops when the
/// canvas element does not exist (the view may not have mounted it).
pub fn render_chart(
    state: &GlobalState,
    canvas_id: &str,
    kind: ChartKind,
    series: &Series,
    options: DatasetOptions,
) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if document.get_element_by_id(canvas_id).is_none() {
        return;
    }

    let mut registry = state.charts.borrow_mut();
    registry.dispose(canvas_id);
    registry.install(Box::new(CanvasChart::start(
        canvas_id,
        kind,
        series.clone(),
        options,
    )));
}

/// Render the chart for the currently active overview tab.
///
/// Call after the DOM has settled (requestAnimationFrame), since tab and view
/// switches destroy and recreate canvas elements.
pub fn render_active_tab_chart(state: &GlobalState) {
    let tab = state.active_tab.get_untracked();
    let summary = state.summary.get_untracked();

    let series = match summary.charts.get(tab.chart_key()) {
        Some(series) => series,
        None => return,
    };

    render_chart(
        state,
        tab.canvas_id(),
        ChartKind::Line,
        series,
        DatasetOptions {
            label: tab.dataset_label().to_string(),
            color: tab.color().to_string(),
            unit: tab.unit().to_string(),
        },
    );
}

fn canvas_context(canvas_id: &str) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas: HtmlCanvasElement = web_sys::window()?
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into()
        .ok()?;

    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    Some((canvas, ctx))
}

/// Draw one frame. `progress` in [0, 1] scales values toward their final
/// height, giving the grow-from-zero entrance.
fn draw(canvas_id: &str, kind: ChartKind, series: &Series, options: &DatasetOptions, progress: f64) {
    let (canvas, ctx) = match canvas_context(canvas_id) {
        Some(pair) => pair,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("暂无数据", width / 2.0 - 32.0, height / 2.0);
        return;
    }

    let n = series.labels.len().min(series.data.len());
    let y_max = y_axis_max(&series.data[..n]);

    // Horizontal grid lines and zero-based y-axis tick labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_tick(value, &options.unit), 5.0, y + 4.0);
    }

    let xs = x_positions(n, MARGIN_LEFT, chart_width, kind);
    let y_of = |value: f64| {
        let scaled = value * progress;
        MARGIN_TOP + (1.0 - scaled / y_max) * chart_height
    };
    let baseline = MARGIN_TOP + chart_height;

    match kind {
        ChartKind::Line => {
            ctx.set_stroke_style(&options.color.as_str().into());
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, (&x, &value)) in xs.iter().zip(&series.data).enumerate() {
                let y = y_of(value);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();

            ctx.set_fill_style(&options.color.as_str().into());
            for (&x, &value) in xs.iter().zip(&series.data) {
                ctx.begin_path();
                let _ = ctx.arc(x, y_of(value), 4.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
        ChartKind::Bar => {
            let slot = chart_width / n as f64;
            let bar_width = slot * 0.6;
            ctx.set_fill_style(&options.color.as_str().into());
            for (&x, &value) in xs.iter().zip(&series.data) {
                let top = y_of(value);
                ctx.fill_rect(x - bar_width / 2.0, top, bar_width, baseline - top);
            }
        }
    }

    // X-axis labels, thinned out when there are many
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let step = label_step(n);
    for (i, (&x, label)) in xs.iter().zip(&series.labels).enumerate() {
        if i % step == 0 {
            let _ = ctx.fill_text(label, x - 20.0, height - 10.0);
        }
    }

    // Dataset legend
    ctx.set_fill_style(&options.color.as_str().into());
    ctx.fill_rect(width - MARGIN_RIGHT - 120.0, 6.0, 10.0, 10.0);
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    let _ = ctx.fill_text(&options.label, width - MARGIN_RIGHT - 104.0, 15.0);
}

/// Ease-in-out quadratic, the entrance easing
fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Top of the y-axis: slightly above the series maximum, never zero so the
/// axis always starts at zero with a non-degenerate range.
fn y_axis_max(data: &[f64]) -> f64 {
    let max = data.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.05
    }
}

/// Unit-suffixed tick label
fn format_tick(value: f64, unit: &str) -> String {
    let number = if value >= 100.0 || (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    };
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

/// X coordinate per point. Lines span the full plot area; bars get centered
/// slots like a category axis.
fn x_positions(n: usize, left: f64, chart_width: f64, kind: ChartKind) -> Vec<f64> {
    match kind {
        ChartKind::Line => {
            if n == 1 {
                vec![left + chart_width / 2.0]
            } else {
                (0..n)
                    .map(|i| left + i as f64 * chart_width / (n - 1) as f64)
                    .collect()
            }
        }
        ChartKind::Bar => {
            let slot = chart_width / n as f64;
            (0..n).map(|i| left + (i as f64 + 0.5) * slot).collect()
        }
    }
}

/// Show every `step`-th x label so long series stay readable
fn label_step(n: usize) -> usize {
    1 + n / 9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_has_fixed_endpoints() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn easing_is_monotone() {
        let mut prev = ease_in_out_quad(0.0);
        for i in 1..=100 {
            let next = ease_in_out_quad(i as f64 / 100.0);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn y_axis_starts_at_zero_with_padding_above_max() {
        let max = y_axis_max(&[10.0, 20.0]);
        assert!(max > 20.0);
        assert!(max < 22.0);
    }

    #[test]
    fn y_axis_never_degenerate() {
        assert_eq!(y_axis_max(&[]), 1.0);
        assert_eq!(y_axis_max(&[0.0, 0.0]), 1.0);
    }

    #[test]
    fn tick_labels_carry_unit_suffix() {
        assert_eq!(format_tick(1200.0, "公里"), "1200 公里");
        assert_eq!(format_tick(3.5, "升"), "3.5 升");
        assert_eq!(format_tick(7.0, ""), "7");
    }

    #[test]
    fn two_labels_give_two_plotted_points() {
        let xs = x_positions(2, 60.0, 720.0, ChartKind::Line);
        assert_eq!(xs, vec![60.0, 780.0]);
    }

    #[test]
    fn single_point_is_centered() {
        let xs = x_positions(1, 60.0, 720.0, ChartKind::Line);
        assert_eq!(xs, vec![60.0 + 360.0]);
    }

    #[test]
    fn bar_slots_stay_inside_plot_area() {
        let xs = x_positions(6, 60.0, 720.0, ChartKind::Bar);
        assert_eq!(xs.len(), 6);
        for x in xs {
            assert!(x > 60.0);
            assert!(x < 780.0);
        }
    }

    #[test]
    fn label_step_thins_long_series() {
        assert_eq!(label_step(6), 1);
        assert_eq!(label_step(12), 2);
        assert_eq!(label_step(36), 5);
    }
}
