//! Page B components.
//!
//! ```text
//! MarketDocument
//! ├── MarketHeader (navigate home)
//! └── main
//!     ├── IntroSection
//!     ├── SummarySection
//!     ├── BurdenSection
//!     │   └── ChartWidget (business-cost)
//!     ├── FeasibilitySection
//!     ├── OpportunitySection
//!     │   └── ChartWidget (market-size)
//!     ├── ConclusionSection
//!     └── MethodologySection
//! ```

mod chart_widget;
mod document;
mod header;
mod sections;

pub use chart_widget::{ChartWidget, nominal_surface, overlay_positions};
pub use document::{MarketDocument, runtime_bootstrap};
pub use header::MarketHeader;
pub use sections::{
    BurdenSection, ConclusionSection, FeasibilitySection, IntroSection, MethodologySection,
    OpportunitySection, SummarySection,
};
