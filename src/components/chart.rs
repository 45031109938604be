//! Chart Components
//!
//! Mood and activity time-series charts using HTML5 Canvas. Every redraw
//! clears the target first, so repeated loads leave a single live drawing
//! per canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::models::{ActivityPoint, MoodPoint};

const MOOD_LINE_COLOR: &str = "#667eea";
const ACTIVITY_BAR_COLOR: &str = "#2ecc71";

/// Mood scores live on a fixed 0-10 axis.
const MOOD_AXIS_MAX: f64 = 10.0;

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Mood line chart component
#[component]
pub fn MoodChart(
    #[prop(into)]
    data: Signal<Vec<MoodPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes; missing canvas is a no-op.
    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_mood_chart(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Activity bar chart component
#[component]
pub fn ActivityChart(
    #[prop(into)]
    data: Signal<Vec<ActivityPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_activity_chart(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Round a series maximum up to a comfortable axis ceiling.
pub(crate) fn axis_max(series_max: f64) -> f64 {
    if series_max <= 0.0 {
        1.0
    } else {
        (series_max * 1.1).ceil()
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Clear the canvas and draw the shared background and horizontal grid.
/// Returns the plot rectangle as (x, y, width, height).
fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    y_max: f64,
) -> (f64, f64, f64, f64) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines (5 segments)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    (MARGIN_LEFT, MARGIN_TOP, chart_width, chart_height)
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data for selected range", width / 2.0 - 80.0, height / 2.0);
}

/// Draw the mood line chart on canvas
fn draw_mood_chart(canvas: &HtmlCanvasElement, points: &[MoodPoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let (left, top, chart_width, chart_height) = draw_frame(&ctx, canvas, MOOD_AXIS_MAX);

    if points.is_empty() {
        draw_no_data(&ctx, canvas);
        return;
    }

    let step_count = (points.len() - 1).max(1) as f64;
    let x_at = |i: usize| left + (i as f64 / step_count) * chart_width;
    let y_at = |mood: f64| top + ((MOOD_AXIS_MAX - mood.clamp(0.0, MOOD_AXIS_MAX)) / MOOD_AXIS_MAX) * chart_height;

    // Line
    ctx.set_stroke_style(&MOOD_LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(point.mood));
        } else {
            ctx.line_to(x_at(i), y_at(point.mood));
        }
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style(&MOOD_LINE_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(point.mood), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis date labels, sampled to avoid overlap
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let height = canvas.height() as f64;
    let label_stride = (points.len() / 6).max(1);
    for (i, point) in points.iter().enumerate().step_by(label_stride) {
        let _ = ctx.fill_text(&short_label(&point.date), x_at(i) - 15.0, height - 10.0);
    }
}

/// Draw the activity bar chart on canvas
fn draw_activity_chart(canvas: &HtmlCanvasElement, points: &[ActivityPoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let series_max = points.iter().map(ActivityPoint::amount).fold(0.0, f64::max);
    let y_max = axis_max(series_max);

    let (left, top, chart_width, chart_height) = draw_frame(&ctx, canvas, y_max);

    if points.is_empty() {
        draw_no_data(&ctx, canvas);
        return;
    }

    let slot = chart_width / points.len() as f64;
    let bar_width = (slot * 0.7).max(1.0);

    ctx.set_fill_style(&ACTIVITY_BAR_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        let bar_height = (point.amount() / y_max) * chart_height;
        let x = left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = top + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // X-axis labels, sampled
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let height = canvas.height() as f64;
    let label_stride = (points.len() / 6).max(1);
    for (i, point) in points.iter().enumerate().step_by(label_stride) {
        let x = left + i as f64 * slot + slot / 2.0 - 15.0;
        let _ = ctx.fill_text(&short_label(point.label()), x, height - 10.0);
    }
}

/// Shorten a date-ish label to keep the axis readable.
fn short_label(raw: &str) -> String {
    crate::state::models::parse_timestamp(raw)
        .map(|dt| dt.format("%m/%d").to_string())
        .unwrap_or_else(|| raw.chars().take(8).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max_pads_and_rounds_up() {
        assert_eq!(axis_max(0.0), 1.0);
        assert_eq!(axis_max(-2.0), 1.0);
        assert_eq!(axis_max(9.0), 10.0);
        assert_eq!(axis_max(9.5), 11.0);
    }

    #[test]
    fn test_short_label_formats_dates() {
        assert_eq!(short_label("2026-03-05"), "03/05");
        assert_eq!(short_label("Week 12 long"), "Week 12 ");
    }
}
