use crate::document::Document;
use crate::error::DecodeError;
use crate::romanization;
use glint_types::{CategoryId, UserId};
use serde_json::Value;

/// A particle definition decoded from a raw store document.
///
/// [`Particle::from_document`] is the validation step of the listing
/// pipeline: every shape problem comes back as a typed [`DecodeError`] so
/// the caller can skip that one document instead of aborting the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: String,
    pub name: String,
    pub category: Option<CategoryId>,
    pub total_pinyin: String,
    pub first_pinyin: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub thumbnail: Option<String>,
    pub owner: Option<UserId>,
}

impl Particle {
    /// Decodes and validates a raw store document.
    ///
    /// `name` is the only required body field. Romanization fields may be
    /// absent (older rows predate them) but must decode when present.
    /// Wrong-type thumbnails degrade to "no thumbnail" rather than
    /// skipping the document.
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        let name = match doc.data.get("name") {
            None | Some(Value::Null) => return Err(DecodeError::MissingField("name")),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(DecodeError::WrongType {
                    field: "name",
                    expected: "string",
                });
            }
        };

        let category = match doc.data.get("category") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(CategoryId::new(s.clone())),
            Some(_) => {
                return Err(DecodeError::WrongType {
                    field: "category",
                    expected: "string",
                });
            }
        };

        let total_pinyin =
            romanization::decode(doc.data.get("total_pinyin").unwrap_or(&Value::Null))?;
        let first_pinyin =
            romanization::decode(doc.data.get("first_pinyin").unwrap_or(&Value::Null))?;

        let thumbnail = doc.get_str("/thumbnail").map(str::to_string);

        Ok(Self {
            id: doc.id.clone(),
            name,
            category,
            total_pinyin,
            first_pinyin,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            thumbnail,
            owner: doc.owner,
        })
    }

    /// Re-encodes this particle as a store document.
    ///
    /// The service itself never writes; seeding and tests do.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut body = serde_json::Map::new();
        body.insert("name".into(), Value::String(self.name.clone()));
        if let Some(category) = &self.category {
            body.insert("category".into(), Value::String(category.to_string()));
        }
        body.insert(
            "total_pinyin".into(),
            Value::String(self.total_pinyin.clone()),
        );
        body.insert(
            "first_pinyin".into(),
            Value::String(self.first_pinyin.clone()),
        );
        if let Some(thumbnail) = &self.thumbnail {
            body.insert("thumbnail".into(), Value::String(thumbnail.clone()));
        }

        Document {
            id: self.id.clone(),
            owner: self.owner,
            created_at: self.created_at,
            updated_at: self.updated_at,
            data: Value::Object(body),
        }
    }
}
