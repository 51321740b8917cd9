//! Codec for stored romanization ("pinyin") values.
//!
//! Historical rows carry romanized names in two shapes: an array of
//! syllable strings, or one pre-joined string. Null and absent both mean
//! "no value". Decoding is lossless over text content: syllables are
//! concatenated in stored order and never altered.

use crate::error::DecodeError;
use serde_json::Value;

/// Decodes a stored romanization value into a display string.
pub fn decode(value: &Value) -> Result<String, DecodeError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Array(items) => {
            let mut out = String::new();
            for item in items {
                match item {
                    Value::String(s) => out.push_str(s),
                    other => {
                        return Err(DecodeError::BadRomanization(format!(
                            "non-string syllable: {other}"
                        )));
                    }
                }
            }
            Ok(out)
        }
        other => Err(DecodeError::BadRomanization(format!(
            "unsupported value: {other}"
        ))),
    }
}

/// Encodes syllables into the stored array form.
///
/// The write path is out of scope for the service itself; this exists for
/// seeding and tests.
#[must_use]
pub fn encode(syllables: &[&str]) -> Value {
    Value::Array(
        syllables
            .iter()
            .map(|s| Value::String((*s).to_string()))
            .collect(),
    )
}
