//! Error types for the geometry engine.

use thiserror::Error;

/// Errors surfaced synchronously by engine operations.
///
/// Degenerate geometry (identical endpoints, progress outside its range) is
/// not an error: those inputs saturate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EngineError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
