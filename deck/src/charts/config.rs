//! Bar chart configurations for the market-sizing page.
//!
//! A [`ChartConfig`] is built once on the server, embedded as JSON in the
//! page and drawn by the browser runtime. Every text the chart shows is
//! derived from the config's [`ValueFormatter`] so tooltips, data labels and
//! ticks agree.

use serde::{Deserialize, Serialize};

use super::format::{UnitStyle, ValueFormatter};
use super::labels::{LABEL_MAX_LEN, WrappedLabel, wrap_label};
use crate::error::{ChartError, ChartResult};

/// Id of the TAM/SAM/SOM chart.
pub const MARKET_SIZE_CHART_ID: &str = "market-size";
/// Id of the annual business cost chart.
pub const BUSINESS_COST_CHART_ID: &str = "business-cost";

/// Approximate number of intervals on the value axis.
const TARGET_TICK_INTERVALS: f64 = 6.0;

/// Which axis carries the categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Categories along x, bars grow upwards.
    #[default]
    Vertical,
    /// Categories along y, bars grow to the right.
    Horizontal,
}

/// How the static value labels sit over the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayStyle {
    /// White bold text centred inside each bar.
    #[default]
    Inside,
    /// Light badge at the far end of each bar.
    EndBadge,
}

/// Tooltip body wording.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipFormat {
    /// Text placed before the value, e.g. `"Cost: "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Unit style of the value.
    #[serde(default)]
    pub units: UnitStyle,
}

/// Complete description of one bar chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Stable id, also used as the canvas id and registry key.
    pub id: String,
    /// Category axis placement.
    pub orientation: Orientation,
    /// Series name (accessible label of the canvas).
    pub dataset_label: String,
    /// Category labels, possibly wrapped.
    pub labels: Vec<WrappedLabel>,
    /// Magnitudes in billions of US dollars.
    pub values: Vec<f64>,
    /// Bar fill colours, one per value.
    pub fill_colors: Vec<String>,
    /// Bar border colours, one per value.
    pub border_colors: Vec<String>,
    /// Border width in CSS pixels.
    pub border_width: f64,
    /// Bar corner radius in CSS pixels.
    pub border_radius: f64,
    /// Share of the category slot occupied by the bar.
    pub bar_fraction: f64,
    /// Share of the category band used by the slot.
    pub category_fraction: f64,
    /// Title drawn along the value axis.
    pub value_axis_title: String,
    /// Formatter shared by ticks, data labels and tooltips.
    pub formatter: ValueFormatter,
    /// Tooltip wording.
    #[serde(default)]
    pub tooltip: TooltipFormat,
    /// Static label overlay style.
    #[serde(default)]
    pub overlay: OverlayStyle,
    /// Caption shown under the chart.
    pub caption: String,
}

impl ChartConfig {
    /// TAM / SAM / SOM market size bars.
    pub fn market_size() -> Self {
        Self {
            id: MARKET_SIZE_CHART_ID.into(),
            orientation: Orientation::Vertical,
            dataset_label: "Market Size (Billions USD)".into(),
            labels: ["TAM", "SAM", "SOM"]
                .iter()
                .map(|l| wrap_label(l, LABEL_MAX_LEN))
                .collect(),
            values: vec![1500.0, 731.0, 7.3],
            fill_colors: strings(&["#66aaff", "#0077ff", "#0044cc"]),
            border_colors: strings(&["#4d94ff", "#0052cc", "#003399"]),
            border_width: 2.0,
            border_radius: 8.0,
            bar_fraction: 0.6,
            category_fraction: 0.7,
            value_axis_title: "Market Size (Billions USD)".into(),
            formatter: ValueFormatter::new(1),
            tooltip: TooltipFormat::default(),
            overlay: OverlayStyle::Inside,
            caption: "Market size progression from TAM to SAM to SOM".into(),
        }
    }

    /// Annual costs of chronic disease to U.S. businesses.
    pub fn business_cost() -> Self {
        Self {
            id: BUSINESS_COST_CHART_ID.into(),
            orientation: Orientation::Horizontal,
            dataset_label: "Annual Cost in Billions ($)".into(),
            labels: [
                "Direct Costs to Private Insurers",
                "Indirect Costs to Employers (Lost Productivity)",
            ]
            .iter()
            .map(|l| wrap_label(l, LABEL_MAX_LEN))
            .collect(),
            values: vec![1460.0, 153.0],
            fill_colors: strings(&["#0044cc", "#66aaff"]),
            border_colors: strings(&["#003399", "#4d94ff"]),
            border_width: 2.0,
            border_radius: 8.0,
            bar_fraction: 0.6,
            category_fraction: 0.7,
            value_axis_title: "Annual Cost (USD)".into(),
            formatter: ValueFormatter::new(2),
            tooltip: TooltipFormat {
                prefix: Some("Cost: ".into()),
                units: UnitStyle::Long,
            },
            overlay: OverlayStyle::EndBadge,
            caption: "Chart showing annual costs to U.S. businesses".into(),
        }
    }

    /// Check internal consistency before drawing.
    pub fn validate(&self) -> ChartResult<()> {
        let n = self.values.len();
        if n == 0 {
            return Err(ChartError::InvalidConfig(format!("{}: no values", self.id)));
        }
        if self.labels.len() != n {
            return Err(ChartError::InvalidConfig(format!(
                "{}: {} labels for {} values",
                self.id,
                self.labels.len(),
                n
            )));
        }
        if self.fill_colors.len() != n || self.border_colors.len() != n {
            return Err(ChartError::InvalidConfig(format!(
                "{}: colour count does not match {} values",
                self.id, n
            )));
        }
        if let Some(bad) = self.values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ChartError::InvalidConfig(format!(
                "{}: value {bad} is not a finite non-negative magnitude",
                self.id
            )));
        }
        for (name, fraction) in [
            ("bar_fraction", self.bar_fraction),
            ("category_fraction", self.category_fraction),
        ] {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(ChartError::InvalidConfig(format!(
                    "{}: {name} {fraction} outside (0, 1]",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Tooltip heading for bar `index`: the label with wrapped lines rejoined.
    pub fn tooltip_title(&self, index: usize) -> Option<String> {
        self.labels.get(index).map(WrappedLabel::joined)
    }

    /// Tooltip body for bar `index`.
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        let value = *self.values.get(index)?;
        let formatted = self.formatter.with_units(self.tooltip.units).format(value);
        Some(match &self.tooltip.prefix {
            Some(prefix) => format!("{prefix}{formatted}"),
            None => formatted,
        })
    }

    /// On-chart value label for bar `index`.
    pub fn data_label(&self, index: usize) -> Option<String> {
        self.values.get(index).map(|v| self.formatter.format(*v))
    }

    /// All on-chart value labels, in bar order.
    pub fn data_labels(&self) -> Vec<String> {
        self.values.iter().map(|v| self.formatter.format(*v)).collect()
    }

    /// Value axis tick text.
    pub fn tick_label(&self, value: f64) -> String {
        self.formatter.format(value)
    }

    /// Tick values from zero up to the first step at or above the largest value.
    pub fn value_ticks(&self) -> Vec<f64> {
        let max = self.values.iter().copied().fold(0.0_f64, f64::max);
        nice_ticks(max, TARGET_TICK_INTERVALS)
    }

    /// Upper end of the value axis.
    pub fn value_axis_max(&self) -> f64 {
        self.value_ticks().last().copied().unwrap_or(1.0)
    }

    /// JSON form embedded into the page.
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    /// Parse the embedded JSON form.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }
}

/// Both fixed charts of the market page, in page order.
pub fn market_page_charts() -> [ChartConfig; 2] {
    [ChartConfig::business_cost(), ChartConfig::market_size()]
}

/// Zero-based ticks with a 1-2-5 step covering `max`.
pub fn nice_ticks(max: f64, target_intervals: f64) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 || target_intervals <= 0.0 {
        return vec![0.0, 1.0];
    }

    let step = nice_step(max / target_intervals);
    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_charts_validate() {
        for chart in market_page_charts() {
            chart.validate().expect("fixed chart is valid");
        }
    }

    #[test]
    fn market_chart_texts_agree() {
        let chart = ChartConfig::market_size();
        assert_eq!(chart.data_labels(), vec!["$1.5T", "$731B", "$7.3B"]);
        assert_eq!(chart.tooltip_label(0).as_deref(), Some("$1.5T"));
        assert_eq!(chart.tooltip_title(2).as_deref(), Some("SOM"));
        assert_eq!(chart.tick_label(1500.0), "$1.5T");
        assert_eq!(chart.tick_label(500.0), "$500B");
    }

    #[test]
    fn cost_chart_texts_agree() {
        let chart = ChartConfig::business_cost();
        assert_eq!(chart.data_labels(), vec!["$1.46T", "$153B"]);
        assert_eq!(chart.tooltip_label(0).as_deref(), Some("Cost: $1.46 Trillion"));
        assert_eq!(chart.tooltip_label(1).as_deref(), Some("Cost: $153 Billion"));
        assert_eq!(
            chart.tooltip_title(0).as_deref(),
            Some("Direct Costs to Private Insurers")
        );
        assert_eq!(chart.tooltip_label(5), None);
    }

    #[test]
    fn ticks_cover_maximum() {
        for chart in market_page_charts() {
            let ticks = chart.value_ticks();
            assert_eq!(ticks[0], 0.0);
            assert!(ticks.windows(2).all(|w| w[0] < w[1]));
            let max = chart.values.iter().copied().fold(0.0, f64::max);
            assert!(chart.value_axis_max() >= max);
        }
        assert_eq!(
            ChartConfig::market_size().value_ticks(),
            vec![0.0, 500.0, 1000.0, 1500.0]
        );
    }

    #[test]
    fn nice_ticks_degenerate_input() {
        assert_eq!(nice_ticks(0.0, 6.0), vec![0.0, 1.0]);
        assert_eq!(nice_ticks(f64::NAN, 6.0), vec![0.0, 1.0]);
        assert_eq!(nice_ticks(7.3, 6.0), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn validate_rejects_mismatched_lengths() {
        let mut chart = ChartConfig::market_size();
        chart.values.push(1.0);
        assert!(matches!(chart.validate(), Err(ChartError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_negative_values() {
        let mut chart = ChartConfig::business_cost();
        chart.values[1] = -3.0;
        assert!(chart.validate().is_err());
    }

    #[test]
    fn json_keeps_wrapped_labels() {
        let chart = ChartConfig::business_cost();
        let json = chart.to_json().unwrap();
        assert!(json.contains(r#"["Direct Costs to","Private Insurers"]"#));
        assert!(json.contains(r#""orientation":"horizontal""#));

        let parsed = ChartConfig::from_json(&json).unwrap();
        assert_eq!(parsed, chart);
    }

    #[test]
    fn from_json_reports_garbage() {
        assert!(ChartConfig::from_json("{not json").is_err());
    }
}
