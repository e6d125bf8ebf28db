//! Pixel geometry of a bar chart.
//!
//! Pure functions of a [`ChartConfig`] and the surface size, shared by the
//! canvas painter and its pointer hit-testing.

use super::config::{ChartConfig, Orientation, OverlayStyle};
use crate::error::{ChartError, ChartResult};

/// Approximate advance of one label character at the axis font size.
const CHAR_WIDTH_PX: f64 = 7.5;
/// Height of one category label line.
pub const LINE_HEIGHT_PX: f64 = 16.0;
/// Gap between an axis and its labels.
const LABEL_GAP_PX: f64 = 8.0;
/// Space reserved for an axis title.
const AXIS_TITLE_PX: f64 = 22.0;
/// Width of the longest value-axis tick label on vertical charts.
const TICK_LABEL_WIDTH_PX: f64 = 48.0;
const EDGE_PX: f64 = 16.0;
/// Gap between a bar end and its value badge.
pub const BADGE_OFFSET_PX: f64 = 6.0;

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// One drawn bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub rect: Rect,
}

/// A value-axis tick: position along the axis and its text.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    /// y for vertical charts, x for horizontal charts.
    pub position: f64,
    pub label: String,
}

/// Where a category's label lines are anchored.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAnchor {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

/// Complete geometry for one chart at one surface size.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub orientation: Orientation,
    pub plot: Rect,
    pub bars: Vec<BarGeometry>,
    pub ticks: Vec<TickMark>,
    pub categories: Vec<CategoryAnchor>,
}

impl BarLayout {
    /// Lay out `config` on a `width` × `height` surface.
    pub fn compute(config: &ChartConfig, width: f64, height: f64) -> ChartResult<Self> {
        config.validate()?;

        let plot = plot_area(config, width, height);
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::Render(format!(
                "{}: surface {width}x{height} too small to draw",
                config.id
            )));
        }

        let axis_max = config.value_axis_max();
        let n = config.values.len() as f64;
        let mut bars = Vec::with_capacity(config.values.len());
        let mut categories = Vec::with_capacity(config.values.len());

        for (index, value) in config.values.iter().enumerate() {
            let share = value / axis_max;
            let lines = config.labels[index]
                .lines()
                .into_iter()
                .map(str::to_owned)
                .collect();

            match config.orientation {
                Orientation::Vertical => {
                    let band = plot.width / n;
                    let thickness = band * config.category_fraction * config.bar_fraction;
                    let length = share * plot.height;
                    let x = plot.x + band * index as f64 + (band - thickness) / 2.0;
                    bars.push(BarGeometry {
                        index,
                        rect: Rect {
                            x,
                            y: plot.bottom() - length,
                            width: thickness,
                            height: length,
                        },
                    });
                    categories.push(CategoryAnchor {
                        index,
                        x: x + thickness / 2.0,
                        y: plot.bottom() + LABEL_GAP_PX,
                        lines,
                    });
                }
                Orientation::Horizontal => {
                    let band = plot.height / n;
                    let thickness = band * config.category_fraction * config.bar_fraction;
                    let length = share * plot.width;
                    let y = plot.y + band * index as f64 + (band - thickness) / 2.0;
                    bars.push(BarGeometry {
                        index,
                        rect: Rect {
                            x: plot.x,
                            y,
                            width: length,
                            height: thickness,
                        },
                    });
                    categories.push(CategoryAnchor {
                        index,
                        x: plot.x - LABEL_GAP_PX,
                        y: y + thickness / 2.0,
                        lines,
                    });
                }
            }
        }

        let ticks = config
            .value_ticks()
            .into_iter()
            .map(|value| {
                let share = value / axis_max;
                let position = match config.orientation {
                    Orientation::Vertical => plot.bottom() - share * plot.height,
                    Orientation::Horizontal => plot.x + share * plot.width,
                };
                TickMark {
                    value,
                    position,
                    label: config.tick_label(value),
                }
            })
            .collect();

        Ok(Self {
            orientation: config.orientation,
            plot,
            bars,
            ticks,
            categories,
        })
    }

    /// Where each bar's value label is anchored, in bar order: the bar centre
    /// for inside labels, just past the bar end for badges.
    pub fn label_anchors(&self, style: OverlayStyle) -> Vec<(f64, f64)> {
        self.bars
            .iter()
            .map(|bar| {
                let (cx, cy) = bar.rect.center();
                match (style, self.orientation) {
                    (OverlayStyle::Inside, _) => (cx, cy),
                    (OverlayStyle::EndBadge, Orientation::Horizontal) => {
                        (bar.rect.right() + BADGE_OFFSET_PX, cy)
                    }
                    (OverlayStyle::EndBadge, Orientation::Vertical) => {
                        (cx, bar.rect.y - BADGE_OFFSET_PX)
                    }
                }
            })
            .collect()
    }

    /// Index of the bar under the point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.bars
            .iter()
            .find(|bar| bar.rect.contains(x, y))
            .map(|bar| bar.index)
    }
}

fn plot_area(config: &ChartConfig, width: f64, height: f64) -> Rect {
    let max_lines = config
        .labels
        .iter()
        .map(|l| l.line_count())
        .max()
        .unwrap_or(1) as f64;

    let (left, bottom) = match config.orientation {
        Orientation::Vertical => (
            AXIS_TITLE_PX + TICK_LABEL_WIDTH_PX + LABEL_GAP_PX,
            LABEL_GAP_PX + max_lines * LINE_HEIGHT_PX,
        ),
        Orientation::Horizontal => {
            let widest = config
                .labels
                .iter()
                .flat_map(|l| l.lines())
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0) as f64;
            (
                widest * CHAR_WIDTH_PX + LABEL_GAP_PX * 2.0,
                LABEL_GAP_PX + LINE_HEIGHT_PX + AXIS_TITLE_PX,
            )
        }
    };

    Rect {
        x: left,
        y: EDGE_PX,
        width: width - left - EDGE_PX,
        height: height - EDGE_PX - bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_bars_scale_with_values() {
        let chart = ChartConfig::market_size();
        let layout = BarLayout::compute(&chart, 600.0, 400.0).unwrap();

        assert_eq!(layout.bars.len(), 3);
        // TAM reaches the top of a 0..1500 axis
        let tam = layout.bars[0].rect;
        assert!((tam.y - layout.plot.y).abs() < 1e-9);
        assert!((tam.bottom() - layout.plot.bottom()).abs() < 1e-9);
        // bars shrink left to right
        assert!(layout.bars[1].rect.height < tam.height);
        assert!(layout.bars[2].rect.height < layout.bars[1].rect.height);
        // left to right ordering
        assert!(layout.bars[0].rect.x < layout.bars[1].rect.x);
    }

    #[test]
    fn horizontal_bars_grow_right() {
        let chart = ChartConfig::business_cost();
        let layout = BarLayout::compute(&chart, 600.0, 350.0).unwrap();

        for bar in &layout.bars {
            assert!((bar.rect.x - layout.plot.x).abs() < 1e-9);
        }
        assert!(layout.bars[0].rect.width > layout.bars[1].rect.width);
        assert!(layout.bars[0].rect.y < layout.bars[1].rect.y);
        // wrapped labels are carried line by line
        assert_eq!(
            layout.categories[0].lines,
            vec!["Direct Costs to".to_string(), "Private Insurers".to_string()]
        );
    }

    #[test]
    fn ticks_follow_formatter() {
        let chart = ChartConfig::market_size();
        let layout = BarLayout::compute(&chart, 600.0, 400.0).unwrap();
        let labels: Vec<_> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["$0B", "$500B", "$1.0T", "$1.5T"]);
        // vertical ticks go up the screen
        assert!(layout.ticks.windows(2).all(|w| w[1].position < w[0].position));
    }

    #[test]
    fn hit_test_finds_bar_centres() {
        for chart in [ChartConfig::market_size(), ChartConfig::business_cost()] {
            let layout = BarLayout::compute(&chart, 640.0, 400.0).unwrap();
            for bar in &layout.bars {
                let (cx, cy) = bar.rect.center();
                assert_eq!(layout.hit_test(cx, cy), Some(bar.index));
            }
            assert_eq!(layout.hit_test(-5.0, -5.0), None);
        }
    }

    #[test]
    fn label_anchors_follow_overlay_style() {
        let chart = ChartConfig::business_cost();
        let layout = BarLayout::compute(&chart, 600.0, 350.0).unwrap();

        let inside = layout.label_anchors(OverlayStyle::Inside);
        assert_eq!(inside[0], layout.bars[0].rect.center());

        let badges = layout.label_anchors(OverlayStyle::EndBadge);
        for (anchor, bar) in badges.iter().zip(&layout.bars) {
            assert_eq!(anchor.0, bar.rect.right() + BADGE_OFFSET_PX);
            assert_eq!(anchor.1, bar.rect.center().1);
        }
    }

    #[test]
    fn tiny_surface_is_rejected() {
        let chart = ChartConfig::business_cost();
        assert!(matches!(
            BarLayout::compute(&chart, 40.0, 20.0),
            Err(ChartError::Render(_))
        ));
    }
}
