use crate::document::Document;
use crate::error::DecodeError;
use glint_types::{CategoryId, now_millis};
use serde_json::Value;

/// One taxonomy entry.
///
/// `kind` tags which asset collection the category classifies; the index
/// only admits entries whose kind equals the listed resource kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: String,
}

impl Category {
    /// Decodes and validates a raw taxonomy document.
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        let name = require_str(&doc.data, "name")?;
        let kind = require_str(&doc.data, "kind")?;
        Ok(Self {
            id: CategoryId::new(doc.id.clone()),
            name,
            kind,
        })
    }

    /// Re-encodes this category as a store document (seeding and tests).
    #[must_use]
    pub fn to_document(&self) -> Document {
        let now = now_millis();
        Document {
            id: self.id.to_string(),
            owner: None,
            created_at: now,
            updated_at: now,
            data: serde_json::json!({
                "name": self.name,
                "kind": self.kind,
            }),
        }
    }
}

fn require_str(body: &Value, field: &'static str) -> Result<String, DecodeError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::WrongType {
            field,
            expected: "string",
        }),
    }
}
