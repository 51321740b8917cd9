//! Error types for the document store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Document body serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
