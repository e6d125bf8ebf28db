//! Page A sections, top to bottom.
//!
//! ```text
//! DeckDocument
//! ├── Navbar
//! ├── Header
//! └── main
//!     ├── ContextSection
//!     ├── ProblemSection
//!     ├── SolutionSection
//!     ├── AdvantageSection
//!     ├── TeamSection
//!     ├── SuccessStoriesSection
//!     ├── MilestonesSection
//!     ├── FinancialsSection
//!     └── AskSection
//! ```

mod advantage;
mod ask;
mod context;
mod document;
mod financials;
mod header;
mod milestones;
mod navbar;
mod problem;
mod solution;
mod success_stories;
mod team;

pub use advantage::AdvantageSection;
pub use ask::AskSection;
pub use context::ContextSection;
pub use document::DeckDocument;
pub use financials::{FinancialsSection, revenue_bar_height_px};
pub use header::Header;
pub use milestones::MilestonesSection;
pub use navbar::Navbar;
pub use problem::ProblemSection;
pub use solution::SolutionSection;
pub use success_stories::SuccessStoriesSection;
pub use team::TeamSection;
