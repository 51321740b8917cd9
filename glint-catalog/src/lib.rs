//! Read-side listing pipeline for particle assets.
//!
//! [`ParticleCatalog`] answers one question: which particles may this
//! caller see, and how should each be shown? A listing runs in four
//! steps:
//!
//! - scope: [`visibility_filter`] turns the caller's identity into a
//!   store predicate, without consulting the store
//! - taxonomy: [`CategoryIndex`] snapshots the categories for the
//!   particle kind
//! - fetch: the document store returns matching rows newest first
//! - project: each document becomes a [`glint_model::ParticleSummary`],
//!   with undecodable documents skipped one by one
//!
//! The pipeline never writes. Seeding and tests insert documents through
//! `glint-store` directly.

mod access;
mod catalog;
mod error;
mod index;
mod project;

pub use access::visibility_filter;
pub use catalog::{CatalogConfig, ParticleCatalog};
pub use error::{CatalogError, CatalogResult};
pub use index::CategoryIndex;
pub use project::{project, project_all};

/// Collection holding particle documents.
pub const PARTICLE_COLLECTION: &str = "particles";

/// Collection holding taxonomy categories.
pub const CATEGORY_COLLECTION: &str = "categories";

/// Kind tag a category must carry to classify particles.
pub const PARTICLE_KIND: &str = "Particle";
