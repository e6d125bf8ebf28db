//! Chart data, formatting, geometry and lifecycle.
//!
//! The market page shows two bar charts. Everything about them that is not
//! pixel painting lives here so it can run (and be tested) natively:
//!
//! - [`format`] - value formatting shared by tooltips, data labels and ticks
//! - [`labels`] - greedy wrapping of long category labels
//! - [`config`] - the two fixed chart configurations
//! - [`layout`] - bar, tick and label geometry for a given surface size
//! - [`lifecycle`] - one live chart per widget, released on every path
//!
//! The browser runtime (`pitch-deck-wasm`) implements [`ChartBackend`] for
//! `<canvas>` elements.

pub mod config;
pub mod format;
pub mod labels;
pub mod layout;
pub mod lifecycle;

pub use config::{
    BUSINESS_COST_CHART_ID, ChartConfig, MARKET_SIZE_CHART_ID, Orientation, OverlayStyle,
    TooltipFormat, market_page_charts, nice_ticks,
};
pub use format::{UnitStyle, ValueFormatter, format_millions, format_usd, round_half_up};
pub use labels::{LABEL_MAX_LEN, WrappedLabel, wrap_label};
pub use layout::{BADGE_OFFSET_PX, BarGeometry, BarLayout, CategoryAnchor, Rect, TickMark};
pub use lifecycle::{ChartBackend, ChartSlot};
