use glint_model::Category;
use glint_store::{DocumentStore, Filter, FindOptions};
use glint_types::CategoryId;
use tracing::warn;

use crate::CATEGORY_COLLECTION;
use crate::error::CatalogResult;

/// In-memory snapshot of the taxonomy for one resource kind.
///
/// Rebuilt per listing so renames show up immediately; the taxonomy is
/// small enough that a linear scan per lookup beats keeping a map warm.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    entries: Vec<Category>,
}

impl CategoryIndex {
    /// Loads every category tagged with `kind` from the store.
    ///
    /// A malformed taxonomy row is logged and left out; it must not take
    /// the listing down with it.
    pub fn build(store: &DocumentStore, kind: &str) -> CatalogResult<Self> {
        let docs = store.find_many(
            CATEGORY_COLLECTION,
            &Filter::field_eq("kind", kind),
            &FindOptions::default(),
        )?;

        let mut entries = Vec::with_capacity(docs.len());
        for doc in docs {
            match Category::from_document(&doc) {
                Ok(category) => entries.push(category),
                Err(reason) => warn!("skipping malformed category {}: {reason}", doc.id),
            }
        }
        Ok(Self { entries })
    }

    /// Builds an index straight from decoded entries.
    #[must_use]
    pub fn from_entries(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    /// Display name for a category id, if the id is known.
    #[must_use]
    pub fn resolve(&self, id: &CategoryId) -> Option<&str> {
        self.entries
            .iter()
            .find(|category| category.id == *id)
            .map(|category| category.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
