use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The response-shaped projection of one particle document.
///
/// Field names are serialized in the PascalCase form the editor client
/// consumes. Category fields stay empty unless the document's reference
/// matched exactly one taxonomy entry. Transient: built per response,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSummary {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CategoryID")]
    pub category_id: String,
    #[serde(rename = "CategoryName")]
    pub category_name: String,
    #[serde(rename = "TotalPinYin")]
    pub total_pinyin: String,
    #[serde(rename = "FirstPinYin")]
    pub first_pinyin: String,
    #[serde(rename = "CreateTime")]
    pub create_time: DateTime<Utc>,
    #[serde(rename = "UpdateTime")]
    pub update_time: DateTime<Utc>,
    #[serde(rename = "Thumbnail")]
    pub thumbnail: String,
}
