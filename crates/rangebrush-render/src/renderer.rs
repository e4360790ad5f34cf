//! Per-frame render inputs and errors.

use rangebrush_core::LinearScale;
use thiserror::Error;

/// Number of axis ticks requested when the caller does not choose.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No handle geometry has been set on the surface")]
    NoGeometry,
    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Context for rendering a single frame.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Scale the selector maps through.
    pub scale: LinearScale,
    /// Text shown in the handle grip.
    pub label: Option<String>,
    /// Approximate number of axis ticks (0 hides the tick marks).
    pub tick_count: usize,
}

impl RenderContext {
    /// Create a new render context.
    pub fn new(scale: LinearScale) -> Self {
        Self {
            scale,
            label: None,
            tick_count: DEFAULT_TICK_COUNT,
        }
    }

    /// Set the handle label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the approximate number of axis ticks.
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }
}
