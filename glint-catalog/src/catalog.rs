use std::sync::Arc;

use glint_model::{Identity, ParticleSummary};
use glint_store::{DocumentStore, Filter, FindOptions};
use tracing::{debug, warn};

use crate::access::visibility_filter;
use crate::error::CatalogResult;
use crate::index::CategoryIndex;
use crate::project::project_all;
use crate::{PARTICLE_COLLECTION, PARTICLE_KIND};

/// Tuning for the listing pipeline.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// When false, every caller sees the full collection.
    pub ownership_enforced: bool,
    /// Ceiling on records per listing. `None` fetches everything, which
    /// matches the editor's historical behavior on small libraries.
    pub max_results: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ownership_enforced: true,
            max_results: None,
        }
    }
}

/// Read-side service behind the particle listing endpoint.
#[derive(Clone)]
pub struct ParticleCatalog {
    store: Arc<DocumentStore>,
    config: CatalogConfig,
}

impl ParticleCatalog {
    #[must_use]
    pub fn new(store: Arc<DocumentStore>, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Lists every particle visible to `identity`, newest first.
    ///
    /// An anonymous caller under enforcement gets an empty listing
    /// before any store access happens, so a broken store cannot turn
    /// "you may see nothing" into an error.
    pub fn list(&self, identity: Option<&Identity>) -> CatalogResult<Vec<ParticleSummary>> {
        let filter = visibility_filter(self.config.ownership_enforced, identity);
        if matches!(filter, Filter::Nothing) {
            debug!("anonymous caller with ownership enforced, listing nothing");
            return Ok(Vec::new());
        }

        let categories = CategoryIndex::build(&self.store, PARTICLE_KIND)?;
        let options = FindOptions::newest_first(self.config.max_results);
        let docs = match &filter {
            Filter::All => self.store.find_all(PARTICLE_COLLECTION, &options)?,
            scoped => self.store.find_many(PARTICLE_COLLECTION, scoped, &options)?,
        };

        let (records, skipped) = project_all(&docs, &categories);
        if skipped > 0 {
            warn!("listing dropped {skipped} undecodable particle documents");
        }
        debug!(
            "listed {} particles against {} categories",
            records.len(),
            categories.len()
        );
        Ok(records)
    }
}
