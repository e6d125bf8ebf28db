//! Site configuration.
//!
//! Loads an optional `pitch.toml`:
//!
//! ```toml
//! [site]
//! title = "RewardHack AI"
//! market_title = "Lyso AI market sizing"
//! home_href = "../index.html"
//! market_path = "market"
//!
//! [assets]
//! chart_runtime_js = "/pkg/pitch_deck_wasm.js"
//! ```
//!
//! Every key is optional. A missing file means defaults; an unreadable or
//! invalid file is reported and ignored.

use std::path::{Component, Path};

use anyhow::{Result, bail};
use pitch_deck::{HomeLink, SiteAssets, SiteOptions};
use serde::Deserialize;
use tracing::{debug, warn};

/// Directory of the market page under the output root.
pub const DEFAULT_MARKET_PATH: &str = "market";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PitchConfig {
    pub site: SiteConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `<title>` of the pitch deck
    pub title: Option<String>,
    /// `<title>` of the market page
    pub market_title: Option<String>,
    /// Target of the market page's back control; derived from
    /// `market_path` when unset
    pub home_href: Option<String>,
    /// Market page directory, relative to the output root
    pub market_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            market_title: None,
            home_href: None,
            market_path: DEFAULT_MARKET_PATH.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// URL of the chart runtime JS loader
    pub chart_runtime_js: Option<String>,
}

impl PitchConfig {
    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Renderer options, with command line overrides applied.
    pub fn site_options(
        &self,
        home_href: Option<&str>,
        chart_runtime_js: Option<&str>,
    ) -> Result<SiteOptions> {
        let defaults = SiteOptions::default();
        let home = match home_href.or(self.site.home_href.as_deref()) {
            Some(href) => HomeLink::to(href),
            None => HomeLink::to(default_home_href(&self.site.market_path)?),
        };

        Ok(SiteOptions {
            deck_title: self.site.title.clone().unwrap_or(defaults.deck_title),
            market_title: self
                .site
                .market_title
                .clone()
                .unwrap_or(defaults.market_title),
            home,
            assets: SiteAssets {
                chart_runtime_js: chart_runtime_js
                    .map(str::to_owned)
                    .or_else(|| self.assets.chart_runtime_js.clone()),
            },
        })
    }
}

/// Check that `market_path` is a plain relative directory path.
pub fn validate_market_path(market_path: &str) -> Result<()> {
    let path = Path::new(market_path);
    if market_path.trim().is_empty() {
        bail!("market_path is empty");
    }
    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        bail!("market_path must be a relative path without '..': {market_path}");
    }
    Ok(())
}

/// Relative link from the market page back to the deck.
pub fn default_home_href(market_path: &str) -> Result<String> {
    validate_market_path(market_path)?;
    let depth = Path::new(market_path).components().count();
    Ok(format!("{}index.html", "../".repeat(depth)))
}
