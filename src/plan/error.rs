//! Engine error taxonomy

use thiserror::Error;

/// Errors surfaced by the planning engine
///
/// Every engine operation is pure and total once its inputs pass
/// validation; invalid input is rejected synchronously before any
/// computation runs. There is no retry or partial-failure distinction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An input was outside its documented domain
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput(reason.into())
    }
}
