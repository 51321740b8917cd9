use chrono::DateTime;
use glint_model::{DecodeError, Document, Particle, ParticleSummary};
use tracing::warn;

use crate::index::CategoryIndex;

/// Shapes one stored document into the record the editor displays.
///
/// Category enrichment is exact-match only: when the document references
/// no category, or one the index does not know, both category fields come
/// back empty rather than echoing a dangling id.
pub fn project(doc: &Document, categories: &CategoryIndex) -> Result<ParticleSummary, DecodeError> {
    let particle = Particle::from_document(doc)?;

    let (category_id, category_name) = particle
        .category
        .as_ref()
        .and_then(|id| categories.resolve(id).map(|name| (id.to_string(), name.to_string())))
        .unwrap_or_default();

    let create_time = DateTime::from_timestamp_millis(particle.created_at)
        .ok_or(DecodeError::BadTimestamp(particle.created_at))?;
    let update_time = DateTime::from_timestamp_millis(particle.updated_at)
        .ok_or(DecodeError::BadTimestamp(particle.updated_at))?;

    Ok(ParticleSummary {
        id: particle.id,
        name: particle.name,
        category_id,
        category_name,
        total_pinyin: particle.total_pinyin,
        first_pinyin: particle.first_pinyin,
        create_time,
        update_time,
        thumbnail: particle.thumbnail.unwrap_or_default(),
    })
}

/// Projects a whole fetch, skipping documents that fail to decode.
///
/// Returns the surviving records in input order plus the skip count. One
/// bad document never aborts the batch.
pub fn project_all(docs: &[Document], categories: &CategoryIndex) -> (Vec<ParticleSummary>, usize) {
    let mut records = Vec::with_capacity(docs.len());
    let mut skipped = 0usize;
    for doc in docs {
        match project(doc, categories) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                warn!("skipping undecodable particle {}: {reason}", doc.id);
            }
        }
    }
    (records, skipped)
}
