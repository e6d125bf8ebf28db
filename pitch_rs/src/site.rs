//! Writing the site to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pitch_deck::{SiteOptions, render_market_page, render_pitch_deck};
use tracing::info;

use crate::config::validate_market_path;

/// Paths written by [`build_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltSite {
    pub deck: PathBuf,
    pub market: PathBuf,
}

/// Render both pages into `out`: `index.html` and `<market_path>/index.html`.
pub fn build_site(out: &Path, market_path: &str, options: &SiteOptions) -> Result<BuiltSite> {
    validate_market_path(market_path)?;

    let market_dir = out.join(market_path);
    fs::create_dir_all(&market_dir)
        .with_context(|| format!("failed to create {}", market_dir.display()))?;

    let deck = out.join("index.html");
    write_page(&deck, &render_pitch_deck(options))?;

    let market = market_dir.join("index.html");
    write_page(&market, &render_market_page(options))?;

    Ok(BuiltSite { deck, market })
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_both_pages() {
        let dir = TempDir::new().unwrap();
        let built = build_site(dir.path(), "invest/market", &SiteOptions::default()).unwrap();

        assert_eq!(built.deck, dir.path().join("index.html"));
        assert_eq!(built.market, dir.path().join("invest/market/index.html"));

        let deck = fs::read_to_string(&built.deck).unwrap();
        assert!(deck.starts_with("<!DOCTYPE html>"));
        assert!(deck.contains("id=\"financials\""));

        let market = fs::read_to_string(&built.market).unwrap();
        assert!(market.contains("data-chart-config"));
    }

    #[test]
    fn refuses_to_escape_output_dir() {
        let dir = TempDir::new().unwrap();
        assert!(build_site(dir.path(), "../outside", &SiteOptions::default()).is_err());
    }
}
