//! Domain model for the Glint asset service.
//!
//! Defines the shapes that flow through the listing pipeline:
//! - [`Document`]: the raw store row (typed system columns plus JSON body)
//! - [`Particle`] and [`Category`]: validated decodes of document bodies
//! - [`Identity`] and [`Role`]: the authenticated requester
//! - [`ParticleSummary`]: the response-shaped display record
//! - [`romanization`]: codec for stored romanized-name values
//!
//! Decoding is the validation boundary: malformed bodies surface as
//! [`DecodeError`] so callers can skip one document without aborting the
//! batch it arrived in.

mod category;
mod document;
mod error;
mod identity;
mod particle;
pub mod romanization;
mod summary;

pub use category::Category;
pub use document::Document;
pub use error::DecodeError;
pub use identity::{Identity, Role};
pub use particle::Particle;
pub use summary::ParticleSummary;
