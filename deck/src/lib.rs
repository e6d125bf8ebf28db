//! # pitch-deck
//!
//! Leptos SSR renderer for a two-page investor pitch site.
//!
//! - **Pitch deck**: one scrolling page from the navbar down to the ask.
//! - **Market page**: market-sizing narrative with two bar charts and a
//!   "Back to Main Site" control.
//!
//! Pages are plain HTML strings; nothing hydrates. The charts are drawn in
//! the browser by `pitch-deck-wasm`, which reads the configuration the
//! server embedded on each `<canvas>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use pitch_deck::{render_market_page, render_pitch_deck, SiteOptions};
//!
//! let options = SiteOptions::default();
//! let deck = render_pitch_deck(&options);
//! let market = render_market_page(&options);
//!
//! assert!(deck.starts_with("<!DOCTYPE html>"));
//! assert!(market.contains("data-chart-config"));
//! ```
//!
//! ## Architecture
//!
//! - [`charts`] - value formatting, label wrapping, chart config, geometry
//!   and the chart instance lifecycle
//! - [`content`] - page copy and figures
//! - [`components`] - Leptos components for both pages
//! - [`styles`] - inlined CSS and the content security policy
//! - [`types`] - content model
//! - [`error`] - chart errors

#![recursion_limit = "256"]

pub mod charts;
pub mod components;
pub mod content;
pub mod error;
pub mod styles;
pub mod types;

use components::{DeckDocument, MarketDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

pub use error::{ChartError, ChartResult};
pub use types::HomeLink;

/// Default `<title>` of the pitch deck.
pub const DEFAULT_DECK_TITLE: &str = "RewardHack AI - High-Performance RL for Enterprise";

/// Script assets referenced by the rendered pages.
#[derive(Clone, Default, Debug)]
pub struct SiteAssets {
    /// URL of the chart runtime's JS loader (wasm-bindgen `--target web`
    /// output). `None` renders the market page without live charts.
    pub chart_runtime_js: Option<String>,
}

/// Everything the renderers can vary.
#[derive(Clone, Debug)]
pub struct SiteOptions {
    pub deck_title: String,
    pub market_title: String,
    /// Target of the market page's back control.
    pub home: HomeLink,
    pub assets: SiteAssets,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            deck_title: DEFAULT_DECK_TITLE.into(),
            market_title: content::MARKET_PAGE_TITLE.into(),
            home: HomeLink::default(),
            assets: SiteAssets::default(),
        }
    }
}

/// Render the pitch deck to a complete HTML document.
pub fn render_pitch_deck(options: &SiteOptions) -> String {
    let doc = view! { <DeckDocument title=options.deck_title.clone() /> };
    let html = doc.to_html();
    debug!(bytes = html.len(), "rendered pitch deck");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the market-sizing page to a complete HTML document.
pub fn render_market_page(options: &SiteOptions) -> String {
    let doc = view! {
        <MarketDocument
            title=options.market_title.clone()
            home=options.home.clone()
            runtime_js=options.assets.chart_runtime_js.clone()
        />
    };
    let html = doc.to_html();
    debug!(bytes = html.len(), home = %options.home.href, "rendered market page");

    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::market_page_charts;
    use crate::content::{CONTACT_EMAIL, LLAMARL_PAPER_URL, NAV_LINKS};

    #[test]
    fn deck_is_a_complete_document() {
        let html = render_pitch_deck(&SiteOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(DEFAULT_DECK_TITLE));
        assert!(html.contains("$615,000"));
        assert!(html.contains(&format!("mailto:{CONTACT_EMAIL}")));
        assert!(html.contains(LLAMARL_PAPER_URL));
    }

    #[test]
    fn every_nav_anchor_has_a_section() {
        let html = render_pitch_deck(&SiteOptions::default());
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)), "{}", link.href);
            assert!(
                html.contains(&format!("id=\"{}\"", link.target_id())),
                "no section for {}",
                link.href
            );
        }
    }

    #[test]
    fn revenue_bars_use_scaled_heights() {
        let html = render_pitch_deck(&SiteOptions::default());
        for height in ["height:38px", "height:77px", "height:269px"] {
            assert!(html.contains(height), "{height}");
        }
    }

    #[test]
    fn overlay_labels_match_formatter() {
        let html = render_market_page(&SiteOptions::default());
        let mut expected = 0;
        for chart in market_page_charts() {
            assert!(html.contains(&format!("id=\"{}\"", chart.id)));
            for label in chart.data_labels() {
                assert!(html.contains(&format!(">{label}</span>")), "{label}");
                expected += 1;
            }
        }
        assert_eq!(html.matches("data-bar-index=").count(), expected);
    }

    #[test]
    fn market_page_headings_use_long_units() {
        let html = render_market_page(&SiteOptions::default());
        assert!(html.contains("Total Addressable Market (TAM): $1.5 Trillion"));
        assert!(html.contains("Serviceable Addressable Market (SAM): $731 Billion"));
        assert!(html.contains("Serviceable Obtainable Market (SOM): $7.3 Billion"));
    }

    #[test]
    fn home_link_is_configurable() {
        let options = SiteOptions {
            home: HomeLink::to("/deck/"),
            ..Default::default()
        };
        let html = render_market_page(&options);
        assert!(html.contains("href=\"/deck/\""));
        assert!(html.contains("data-role=\"navigate-home\""));
        assert!(html.contains("Back to Main Site"));
    }

    #[test]
    fn runtime_script_only_when_configured() {
        let bare = render_market_page(&SiteOptions::default());
        assert!(!bare.contains("<script"));

        let options = SiteOptions {
            assets: SiteAssets {
                chart_runtime_js: Some("./pkg/pitch_deck_wasm.js".into()),
            },
            ..Default::default()
        };
        let html = render_market_page(&options);
        assert!(html.contains("import init from \"./pkg/pitch_deck_wasm.js\""));
    }

    #[test]
    fn runtime_url_cannot_close_the_script() {
        let options = SiteOptions {
            assets: SiteAssets {
                chart_runtime_js: Some("/pkg/x.js\"</script><p>injected</p>".into()),
            },
            ..Default::default()
        };
        let html = render_market_page(&options);
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(!html.contains("<p>injected"));
    }
}
