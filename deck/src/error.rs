//! Error types for chart construction.

use thiserror::Error;

/// Result alias used by the chart modules.
pub type ChartResult<T> = Result<T, ChartError>;

/// Ways building or drawing a chart can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// The host element that should carry the chart is missing.
    #[error("drawing surface for chart '{0}' is not available")]
    SurfaceUnavailable(String),

    /// The surface exists but refused to hand out a drawing context.
    #[error("drawing context unavailable: {0}")]
    ContextUnavailable(String),

    /// The chart description is inconsistent or could not be parsed.
    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    /// Painting failed part way.
    #[error("chart render failed: {0}")]
    Render(String),
}
