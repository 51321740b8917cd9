use glint_types::UserId;
use serde::{Deserialize, Serialize};

/// A raw document row from the store.
///
/// System columns (`id`, `owner`, timestamps) are typed; everything else
/// lives in the opaque JSON `data` body, whose shape is checked by the
/// decoders in this crate, not by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub owner: Option<UserId>,
    pub created_at: i64,
    pub updated_at: i64,
    pub data: serde_json::Value,
}

impl Document {
    /// Extract a string value from `data` using a JSON pointer (e.g., "/name").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }
}
