//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pitch_deck::charts::LABEL_MAX_LEN;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "pitch.toml";

#[derive(Parser, Debug)]
#[command(name = "pitch")]
#[command(about = "Build the RewardHack AI pitch site (pitch deck + market-sizing page)")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write both pages into an output directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Print one page to stdout
    Render {
        #[arg(value_enum)]
        page: Page,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Format a value in billions of USD the way the charts do
    Format {
        /// Magnitude in billions
        value: f64,
        /// Decimals of the trillion form
        #[arg(long, default_value_t = 1)]
        decimals: u8,
        /// Spell out "Trillion"/"Billion"
        #[arg(long)]
        long: bool,
    },
    /// Wrap a chart label, one line per output line
    Wrap {
        label: String,
        /// Maximum characters per line
        #[arg(long, default_value_t = LABEL_MAX_LEN)]
        max: usize,
    },
}

/// Options shared by the page-producing commands.
#[derive(clap::Args, Debug, Clone)]
pub struct SiteArgs {
    /// Site config file (TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
    /// Where the market page's back control leads
    #[arg(long)]
    pub home_href: Option<String>,
    /// URL of the chart runtime JS loader
    #[arg(long)]
    pub chart_runtime_js: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// The pitch deck
    Deck,
    /// The market-sizing page
    Market,
}
