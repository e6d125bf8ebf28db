//! Content types for the pitch pages.
//!
//! All page copy is static, so these types borrow `&'static` data and are
//! `Copy` where they can be. Components take them by value.
//!
//! # Example
//!
//! ```rust
//! use pitch_deck::types::{FeatureCard, Run, Tone};
//!
//! const CARD: FeatureCard = FeatureCard {
//!     icon: "M13 10V3L4 14h7v7l9-11h-7z",
//!     title: "Radical Efficiency",
//!     body: &[
//!         Run::Text("Our async framework is "),
//!         Run::Strong("4x faster", Tone::Positive),
//!         Run::Text(" for Llama 70B."),
//!     ],
//! };
//! assert_eq!(CARD.body.len(), 3);
//! ```

use crate::charts::ValueFormatter;

/// Text colour of emphasised runs and table cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Brightest text colour of the section.
    Bright,
    /// Brand blue.
    Accent,
    /// Green.
    Positive,
    /// Red.
    Negative,
    /// Yellow.
    Caution,
}

impl Tone {
    /// CSS class carrying the colour.
    pub fn class(self) -> &'static str {
        match self {
            Tone::Bright => "tone-bright",
            Tone::Accent => "tone-accent",
            Tone::Positive => "tone-positive",
            Tone::Negative => "tone-negative",
            Tone::Caution => "tone-caution",
        }
    }
}

/// One piece of rich text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Run {
    /// Plain text.
    Text(&'static str),
    /// Bold text in a colour.
    Strong(&'static str, Tone),
    /// Outbound link, opened in a new tab.
    Link {
        /// Visible text.
        text: &'static str,
        /// Target URL.
        href: &'static str,
    },
}

impl Run {
    /// Visible text of the run.
    pub fn text(&self) -> &'static str {
        match self {
            Run::Text(t) | Run::Strong(t, _) => t,
            Run::Link { text, .. } => text,
        }
    }
}

/// A paragraph made of runs.
pub type Rich = &'static [Run];

/// Visible text of a paragraph.
pub fn plain_text(rich: Rich) -> String {
    rich.iter().map(Run::text).collect()
}

/// Navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// In-page anchor, e.g. `#team`.
    pub href: &'static str,
    /// Link text.
    pub label: &'static str,
}

impl NavLink {
    /// Target section id without the leading `#`.
    pub fn target_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

/// Card with an icon badge, a title and a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    /// SVG path data (24×24 stroke icon).
    pub icon: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub body: Rich,
}

/// Cell of the competitor comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Yes,
    No,
    Low,
    Medium,
    High,
    Hard,
    Wip,
}

impl Rating {
    /// Cell text.
    pub fn label(self) -> &'static str {
        match self {
            Rating::Yes => "✅ Yes",
            Rating::No => "❌ No",
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
            Rating::Hard => "Hard",
            Rating::Wip => "WIP",
        }
    }

    /// Cell colour.
    pub fn tone(self) -> Tone {
        match self {
            Rating::Yes | Rating::High => Tone::Positive,
            Rating::No | Rating::Low => Tone::Negative,
            Rating::Medium | Rating::Hard | Rating::Wip => Tone::Caution,
        }
    }
}

/// Column of the comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Competitor {
    /// Product name.
    pub name: &'static str,
    /// Licensing, e.g. "Open Source" or "Paid".
    pub kind: &'static str,
}

/// Row of the comparison table; one rating per competitor, ours last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Compared capability.
    pub feature: &'static str,
    /// Ratings in competitor order.
    pub ratings: &'static [Rating],
}

/// Roadmap phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    /// Phase and duration, e.g. "Phase 1 (~3 Months)".
    pub phase: &'static str,
    /// Phase name.
    pub title: &'static str,
    /// What happens in the phase.
    pub summary: &'static str,
    /// Exit criterion.
    pub success: Rich,
    /// Highlighted as the phase in progress.
    pub current: bool,
}

/// One year of the revenue projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueProjection {
    /// "Year 1".
    pub year: &'static str,
    /// Company phase.
    pub phase: &'static str,
    /// Target customer count, may be a range.
    pub customers: &'static str,
    /// Average annual recurring revenue in millions of USD.
    pub arr_millions: f64,
}

/// Line of the use-of-funds breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FundAllocation {
    /// What the money is for.
    pub purpose: &'static str,
    /// Whole US dollars.
    pub amount_usd: u64,
}

/// Row of the early-detection feasibility table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectionStudy {
    pub disease: &'static str,
    /// Reported accuracy, free form ("80-95%", "AUC 0.70").
    pub accuracy: &'static str,
    /// Key finding.
    pub finding: &'static str,
}

/// TAM, SAM or SOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketTier {
    /// Acronym.
    pub code: &'static str,
    /// Full name.
    pub name: &'static str,
    /// Size in billions of USD.
    pub value_billions: f64,
    /// Heading colour (matches the chart bar).
    pub color: &'static str,
    /// Methodology paragraph.
    pub description: &'static str,
}

impl MarketTier {
    /// "Total Addressable Market (TAM)".
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }

    /// Size in long units, e.g. "$1.5 Trillion".
    pub fn size_long(&self, formatter: ValueFormatter) -> String {
        formatter
            .with_units(crate::charts::UnitStyle::Long)
            .format(self.value_billions)
    }
}

/// Card of the TL;DR summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    /// Leading emoji.
    pub icon: &'static str,
    pub title: &'static str,
    /// Bullet points.
    pub items: &'static [&'static str],
}

/// Where the market page's "Back to Main Site" control leads.
///
/// The static page needs a real link target; the browser runtime can replace
/// the navigation with a host callback (see `pitch-deck-wasm`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeLink {
    /// Link target.
    pub href: String,
    /// Visible text.
    pub label: String,
}

impl Default for HomeLink {
    fn default() -> Self {
        Self {
            href: "../index.html".into(),
            label: "Back to Main Site".into(),
        }
    }
}

impl HomeLink {
    /// Default label, custom target.
    pub fn to(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_labels_and_tones() {
        assert_eq!(Rating::Yes.label(), "✅ Yes");
        assert_eq!(Rating::No.tone(), Tone::Negative);
        assert_eq!(Rating::Wip.tone(), Tone::Caution);
        assert_eq!(Rating::High.tone().class(), "tone-positive");
    }

    #[test]
    fn plain_text_joins_runs() {
        const BODY: Rich = &[
            Run::Text("We are "),
            Run::Strong("fast", Tone::Positive),
            Run::Text(", see "),
            Run::Link {
                text: "the paper",
                href: "https://example.com",
            },
        ];
        assert_eq!(plain_text(BODY), "We are fast, see the paper");
    }

    #[test]
    fn nav_target_id() {
        let link = NavLink {
            href: "#success-stories",
            label: "Success Stories",
        };
        assert_eq!(link.target_id(), "success-stories");
    }

    #[test]
    fn home_link_defaults() {
        let home = HomeLink::to("/");
        assert_eq!(home.href, "/");
        assert_eq!(home.label, "Back to Main Site");
    }
}
