//! Leptos components for both pages.
//!
//! Everything renders once on the server with `RenderHtml::to_html`; no
//! reactive state is involved. [`deck`] holds the pitch deck sections,
//! [`market`] the market-sizing page and its chart widgets.

mod icons;
mod layout;

pub mod deck;
pub mod market;

pub use deck::DeckDocument;
pub use icons::{Icon, IconBadge};
pub use layout::{FeatureCardView, Paragraph, RichText, Section, SectionTitle};
pub use market::{ChartWidget, MarketDocument};
