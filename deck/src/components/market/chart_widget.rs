//! Static half of a chart widget.
//!
//! The server renders a `<canvas>` carrying the chart configuration, an
//! overlay with the formatted value of every bar and a caption. The browser
//! runtime draws on the canvas and moves the overlay labels onto the drawn
//! bars; without it the overlay still shows the numbers.

use leptos::prelude::*;
use tracing::error;

use crate::charts::{BarLayout, ChartConfig, Orientation, OverlayStyle};

/// Surface size the overlay positions are computed for before the runtime
/// knows the real canvas size.
pub fn nominal_surface(orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Vertical => (600.0, 400.0),
        Orientation::Horizontal => (600.0, 350.0),
    }
}

/// Overlay anchor of each bar as percentages of the surface, in bar order.
pub fn overlay_positions(config: &ChartConfig, width: f64, height: f64) -> Vec<(f64, f64)> {
    let layout = match BarLayout::compute(config, width, height) {
        Ok(layout) => layout,
        Err(e) => {
            error!(chart = %config.id, error = %e, "cannot lay out chart overlay");
            return Vec::new();
        }
    };

    layout
        .label_anchors(config.overlay)
        .into_iter()
        .map(|(x, y)| (x / width * 100.0, y / height * 100.0))
        .collect()
}

/// Canvas, value overlay and caption of one chart.
#[component]
pub fn ChartWidget(config: ChartConfig) -> impl IntoView {
    let json = config.to_json().unwrap_or_else(|e| {
        error!(chart = %config.id, error = %e, "cannot serialise chart config");
        String::new()
    });

    let (width, height) = nominal_surface(config.orientation);
    let positions = overlay_positions(&config, width, height);

    let container_class = match config.orientation {
        Orientation::Vertical => "chart-container chart-vertical",
        Orientation::Horizontal => "chart-container chart-horizontal",
    };
    let label_class = match config.overlay {
        OverlayStyle::Inside => "bar-label bar-label-inside",
        OverlayStyle::EndBadge => "bar-label bar-label-badge",
    };

    let labels = config
        .data_labels()
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let style = positions
                .get(index)
                .map(|(x, y)| format!("left:{x:.2}%;top:{y:.2}%"))
                .unwrap_or_default();
            let title = config.tooltip_title(index).unwrap_or_default();
            view! {
                <span class=label_class data-bar-index=index.to_string() style=style title=title>
                    {text}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <figure class="chart">
            <div class=container_class>
                <canvas
                    id=config.id.clone()
                    class="chart-canvas"
                    role="img"
                    aria-label=config.dataset_label.clone()
                    data-chart-config=json
                ></canvas>
                <div class="chart-overlay" data-chart-overlay=config.id.clone()>
                    {labels}
                </div>
            </div>
            <figcaption class="chart-caption">{config.caption.clone()}</figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_positions_stay_on_surface() {
        for chart in crate::charts::market_page_charts() {
            let (w, h) = nominal_surface(chart.orientation);
            let positions = overlay_positions(&chart, w, h);
            assert_eq!(positions.len(), chart.values.len());
            for (x, y) in positions {
                assert!((0.0..=100.0).contains(&x), "{}: x {x}", chart.id);
                assert!((0.0..=100.0).contains(&y), "{}: y {y}", chart.id);
            }
        }
    }

    #[test]
    fn badges_sit_past_bar_end() {
        let chart = ChartConfig::business_cost();
        let (w, h) = nominal_surface(chart.orientation);
        let layout = BarLayout::compute(&chart, w, h).unwrap();
        let positions = overlay_positions(&chart, w, h);
        let right = layout.bars[1].rect.right() / w * 100.0;
        assert!(positions[1].0 > right);
    }

    #[test]
    fn broken_config_has_no_positions() {
        let mut chart = ChartConfig::market_size();
        chart.values.clear();
        assert!(overlay_positions(&chart, 600.0, 400.0).is_empty());
    }
}
