//! `<canvas>` implementation of [`ChartBackend`].
//!
//! A [`CanvasChart`] holds its pointer listeners and what it changed on the
//! page. Dropping it removes the listeners, puts the overlay labels and the
//! canvas size back and clears the tooltip, so a slot that replaces or
//! unmounts a chart leaves the widget as the server rendered it.

use pitch_deck::charts::layout::LINE_HEIGHT_PX;
use pitch_deck::charts::{BarLayout, ChartBackend, ChartConfig, Orientation, Rect};
use pitch_deck::components::market::nominal_surface;
use pitch_deck::error::{ChartError, ChartResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, MouseEvent};

const AXIS_FONT: &str = "12px 'Inter', system-ui, sans-serif";
const TITLE_FONT: &str = "bold 13px 'Inter', system-ui, sans-serif";
const TEXT_COLOR: &str = "#475569";
const GRID_COLOR: &str = "rgba(148, 163, 184, 0.25)";
const AXIS_COLOR: &str = "#cbd5e1";

/// Pixels of the backing store for a CSS size at a device pixel ratio.
pub fn device_pixels(css: f64, dpr: f64) -> u32 {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    (css.max(0.0) * dpr).round() as u32
}

/// Tooltip shown over bar `index`: the unwrapped label, then the value.
pub fn tooltip_text(config: &ChartConfig, index: usize) -> Option<String> {
    let title = config.tooltip_title(index)?;
    let label = config.tooltip_label(index)?;
    Some(format!("{title}\n{label}"))
}

/// Builds [`CanvasChart`]s.
pub struct CanvasBackend;

/// A chart painted on a canvas, with its tooltip listeners.
///
/// Created before anything on the page is touched, so dropping it undoes
/// whatever construction got through, including a partial one.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
    /// Backing store size before the chart resized it.
    restore_size: (u32, u32),
    /// Overlay labels moved onto the bars, with their server-rendered style.
    moved_labels: Vec<(HtmlElement, Option<String>)>,
}

impl ChartBackend for CanvasBackend {
    type Surface = HtmlCanvasElement;
    type Instance = CanvasChart;

    fn create(&self, canvas: &HtmlCanvasElement, config: &ChartConfig) -> ChartResult<CanvasChart> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ChartError::ContextUnavailable(js_message(&e)))?
            .ok_or_else(|| ChartError::ContextUnavailable(format!("{}: no 2d context", config.id)))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::ContextUnavailable(format!("{}: 2d context cast failed", config.id)))?;

        let (width, height) = surface_size(
            canvas.client_width(),
            canvas.client_height(),
            config.orientation,
        );
        let layout = BarLayout::compute(config, width, height)?;

        let on_move = {
            let canvas = canvas.clone();
            let config = config.clone();
            let layout = layout.clone();
            Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let x = f64::from(event.client_x()) - rect.left();
                let y = f64::from(event.client_y()) - rect.top();
                let tip = layout
                    .hit_test(x, y)
                    .and_then(|index| tooltip_text(&config, index));
                match tip {
                    Some(text) => canvas.set_attribute("title", &text).ok(),
                    None => canvas.remove_attribute("title").ok(),
                };
            }))
        };
        let on_leave = {
            let canvas = canvas.clone();
            Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_event: MouseEvent| {
                canvas.remove_attribute("title").ok();
            }))
        };

        // from here on every early return drops `chart`, which restores the page
        let mut chart = CanvasChart {
            canvas: canvas.clone(),
            on_move,
            on_leave,
            restore_size: (canvas.width(), canvas.height()),
            moved_labels: Vec::new(),
        };

        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        canvas.set_width(device_pixels(width, dpr));
        canvas.set_height(device_pixels(height, dpr));
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| ChartError::Render(js_message(&e)))?;
        paint(&ctx, config, &layout, width, height).map_err(|e| ChartError::Render(js_message(&e)))?;
        chart.moved_labels = place_overlay(canvas, config, &layout);

        canvas
            .add_event_listener_with_callback("mousemove", chart.on_move.as_ref().unchecked_ref())
            .map_err(|e| ChartError::Render(js_message(&e)))?;
        canvas
            .add_event_listener_with_callback("mouseleave", chart.on_leave.as_ref().unchecked_ref())
            .map_err(|e| ChartError::Render(js_message(&e)))?;

        Ok(chart)
    }
}

impl Drop for CanvasChart {
    fn drop(&mut self) {
        // removing a listener that was never added is a no-op
        self.canvas
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
            .ok();
        self.canvas
            .remove_event_listener_with_callback("mouseleave", self.on_leave.as_ref().unchecked_ref())
            .ok();

        for (label, style) in self.moved_labels.drain(..) {
            match style {
                Some(style) => label.set_attribute("style", &style).ok(),
                None => label.remove_attribute("style").ok(),
            };
        }

        // resizing clears the pixels and resets the context transform
        let (width, height) = self.restore_size;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.canvas.remove_attribute("title").ok();
    }
}

/// CSS size to draw at: the laid-out size, or the nominal widget size while
/// the canvas is hidden or detached.
pub fn surface_size(client_width: i32, client_height: i32, orientation: Orientation) -> (f64, f64) {
    if client_width > 0 && client_height > 0 {
        (f64::from(client_width), f64::from(client_height))
    } else {
        nominal_surface(orientation)
    }
}

fn paint(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    layout: &BarLayout,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    let plot = layout.plot;

    // grid and value axis ticks
    ctx.set_font(AXIS_FONT);
    ctx.set_line_width(1.0);
    for tick in &layout.ticks {
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.begin_path();
        match layout.orientation {
            Orientation::Vertical => {
                ctx.move_to(plot.x, tick.position);
                ctx.line_to(plot.right(), tick.position);
            }
            Orientation::Horizontal => {
                ctx.move_to(tick.position, plot.y);
                ctx.line_to(tick.position, plot.bottom());
            }
        }
        ctx.stroke();

        ctx.set_fill_style_str(TEXT_COLOR);
        match layout.orientation {
            Orientation::Vertical => {
                ctx.set_text_align("right");
                ctx.set_text_baseline("middle");
                ctx.fill_text(&tick.label, plot.x - 8.0, tick.position)?;
            }
            Orientation::Horizontal => {
                ctx.set_text_align("center");
                ctx.set_text_baseline("top");
                ctx.fill_text(&tick.label, tick.position, plot.bottom() + 8.0)?;
            }
        }
    }

    // baseline
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.begin_path();
    match layout.orientation {
        Orientation::Vertical => {
            ctx.move_to(plot.x, plot.bottom());
            ctx.line_to(plot.right(), plot.bottom());
        }
        Orientation::Horizontal => {
            ctx.move_to(plot.x, plot.y);
            ctx.line_to(plot.x, plot.bottom());
        }
    }
    ctx.stroke();

    // bars
    for bar in &layout.bars {
        rounded_rect(ctx, &bar.rect, config.border_radius)?;
        ctx.set_fill_style_str(&config.fill_colors[bar.index]);
        ctx.fill();
        ctx.set_line_width(config.border_width);
        ctx.set_stroke_style_str(&config.border_colors[bar.index]);
        ctx.stroke();
    }

    // category labels, one line per wrapped segment
    ctx.set_font(AXIS_FONT);
    ctx.set_fill_style_str(TEXT_COLOR);
    for anchor in &layout.categories {
        let count = anchor.lines.len() as f64;
        for (i, line) in anchor.lines.iter().enumerate() {
            match layout.orientation {
                Orientation::Vertical => {
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("top");
                    ctx.fill_text(line, anchor.x, anchor.y + i as f64 * LINE_HEIGHT_PX)?;
                }
                Orientation::Horizontal => {
                    ctx.set_text_align("right");
                    ctx.set_text_baseline("middle");
                    let offset = (i as f64 - (count - 1.0) / 2.0) * LINE_HEIGHT_PX;
                    ctx.fill_text(line, anchor.x, anchor.y + offset)?;
                }
            }
        }
    }

    // value axis title
    ctx.set_font(TITLE_FONT);
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_text_align("center");
    match layout.orientation {
        Orientation::Vertical => {
            ctx.save();
            ctx.translate(12.0, plot.y + plot.height / 2.0)?;
            ctx.rotate(-std::f64::consts::FRAC_PI_2)?;
            ctx.set_text_baseline("middle");
            ctx.fill_text(&config.value_axis_title, 0.0, 0.0)?;
            ctx.restore();
        }
        Orientation::Horizontal => {
            ctx.set_text_baseline("bottom");
            ctx.fill_text(&config.value_axis_title, plot.x + plot.width / 2.0, height - 4.0)?;
        }
    }

    Ok(())
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(rect.x + r, rect.y);
    ctx.arc_to(rect.right(), rect.y, rect.right(), rect.bottom(), r)?;
    ctx.arc_to(rect.right(), rect.bottom(), rect.x, rect.bottom(), r)?;
    ctx.arc_to(rect.x, rect.bottom(), rect.x, rect.y, r)?;
    ctx.arc_to(rect.x, rect.y, rect.right(), rect.y, r)?;
    ctx.close_path();
    Ok(())
}

/// Move the server-rendered value labels onto the drawn bars. Returns each
/// moved label with the `style` it had before.
fn place_overlay(
    canvas: &HtmlCanvasElement,
    config: &ChartConfig,
    layout: &BarLayout,
) -> Vec<(HtmlElement, Option<String>)> {
    let mut moved = Vec::new();
    let Some(document) = canvas.owner_document() else {
        return moved;
    };
    let selector = format!("[data-chart-overlay=\"{}\"] [data-bar-index]", config.id);
    let Ok(labels) = document.query_selector_all(&selector) else {
        return moved;
    };

    let anchors = layout.label_anchors(config.overlay);
    for i in 0..labels.length() {
        let Some(label) = labels
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let index = bar_index(&label);
        if let Some((x, y)) = index.and_then(|index| anchors.get(index)) {
            let original = label.get_attribute("style");
            let style = label.style();
            style.set_property("left", &format!("{x:.1}px")).ok();
            style.set_property("top", &format!("{y:.1}px")).ok();
            moved.push((label, original));
        }
    }
    moved
}

fn bar_index(element: &Element) -> Option<usize> {
    element.get_attribute("data-bar-index")?.parse().ok()
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_joins_wrapped_title_and_value() {
        let chart = ChartConfig::business_cost();
        assert_eq!(
            tooltip_text(&chart, 0).as_deref(),
            Some("Direct Costs to Private Insurers\nCost: $1.46 Trillion")
        );
        assert_eq!(
            tooltip_text(&ChartConfig::market_size(), 1).as_deref(),
            Some("SAM\n$731B")
        );
        assert_eq!(tooltip_text(&chart, 9), None);
    }

    #[test]
    fn hidden_canvas_draws_at_nominal_size() {
        assert_eq!(surface_size(0, 0, Orientation::Vertical), (600.0, 400.0));
        assert_eq!(surface_size(0, 200, Orientation::Horizontal), (600.0, 350.0));
        assert_eq!(surface_size(820, 400, Orientation::Vertical), (820.0, 400.0));
    }

    #[test]
    fn device_pixels_scale_and_guard() {
        assert_eq!(device_pixels(600.0, 2.0), 1200);
        assert_eq!(device_pixels(350.0, 1.5), 525);
        assert_eq!(device_pixels(400.0, 0.0), 400);
        assert_eq!(device_pixels(-10.0, 1.0), 0);
        assert_eq!(device_pixels(400.0, f64::NAN), 400);
    }
}
