//! # pitch
//!
//! Builds the RewardHack AI pitch site into a directory of static HTML:
//!
//! - `index.html` - the pitch deck
//! - `<market_path>/index.html` - the market-sizing page with its charts
//!
//! ## Usage
//!
//! ```bash
//! # Build into ./site using ./pitch.toml when present
//! pitch build
//!
//! # Market page with live charts, custom back link
//! pitch build --out dist --chart-runtime-js /pkg/pitch_deck_wasm.js --home-href /
//!
//! # One page to stdout
//! pitch render market > market.html
//!
//! # Chart helpers
//! pitch format 1460 --decimals 2      # $1.46T
//! pitch wrap "Direct Costs to Private Insurers"
//! ```

mod args;
mod config;
mod site;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pitch_deck::charts::{UnitStyle, ValueFormatter, wrap_label};
use pitch_deck::{render_market_page, render_pitch_deck};
use tracing::debug;

use args::{Cli, Command, Page, SiteArgs};
use config::PitchConfig;

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(site: &SiteArgs) -> PitchConfig {
    let config = PitchConfig::load_from_path(&site.config);
    debug!(path = %site.config.display(), ?config, "loaded config");
    config
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build { out, site } => {
            let config = load_config(&site);
            let options =
                config.site_options(site.home_href.as_deref(), site.chart_runtime_js.as_deref())?;
            let built = site::build_site(&out, &config.site.market_path, &options)?;
            println!("{}", built.deck.display());
            println!("{}", built.market.display());
        }
        Command::Render { page, site } => {
            let config = load_config(&site);
            let options =
                config.site_options(site.home_href.as_deref(), site.chart_runtime_js.as_deref())?;
            let html = match page {
                Page::Deck => render_pitch_deck(&options),
                Page::Market => render_market_page(&options),
            };
            println!("{html}");
        }
        Command::Format {
            value,
            decimals,
            long,
        } => {
            let units = if long { UnitStyle::Long } else { UnitStyle::Short };
            println!("{}", ValueFormatter::new(decimals).with_units(units).format(value));
        }
        Command::Wrap { label, max } => {
            for line in wrap_label(&label, max).lines() {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[pitch] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
