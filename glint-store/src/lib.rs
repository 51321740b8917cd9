//! SQLite-backed document store for Glint.
//!
//! A deliberately small document-database surface: named collections,
//! predicate fetches with a defined order, a count, and an insert used by
//! seeding and tests. The listing pipeline is read-only; there is no
//! update or delete here.

mod error;
mod filter;
mod store;

pub use error::{StoreError, StoreResult};
pub use filter::{Filter, FindOptions, SortOrder};
pub use store::DocumentStore;
