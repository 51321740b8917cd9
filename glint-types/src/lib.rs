//! Core identifier types for Glint.
//!
//! This crate defines the small, widely-shared primitives used throughout
//! the asset service:
//! - Asset and user identifiers (UUID v7 / v4)
//! - Category identifiers (human-assigned strings)
//! - Epoch-millisecond clock helper
//!
//! Domain shapes (documents, particles, taxonomy entries, display records)
//! belong in `glint-model`, not here.

mod ids;
mod time;

pub use ids::{AssetId, CategoryId, UserId};
pub use time::now_millis;
