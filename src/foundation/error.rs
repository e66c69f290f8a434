//! Error types for the engine.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type MelismaResult<T> = Result<T, MelismaError>;

/// Errors surfaced by validation and layout entry points.
///
/// Per-frame sampling functions never error: malformed per-frame input
/// degrades to an empty or identity result so a renderer never has to handle
/// a failure mid-frame. Errors are reserved for construction-time validation.
#[derive(Error, Debug)]
pub enum MelismaError {
    /// Input data failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Layout could not be produced from otherwise valid input.
    #[error("layout error: {0}")]
    Layout(String),
}

impl MelismaError {
    /// Creates a validation error from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a layout error from any message.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
