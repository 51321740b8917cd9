//! Listing pipeline error types.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can abort a listing.
///
/// Undecodable documents are not errors at this level; the projector
/// skips them one by one. Only a failing store aborts the whole listing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("store error: {0}")]
    Store(#[from] glint_store::StoreError),
}
