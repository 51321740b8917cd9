//! Error type for document body decoding.

use thiserror::Error;

/// A single document failed shape validation.
///
/// These are per-document faults: listing code skips the offending
/// document and continues, it never aborts the batch.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A required field is absent (or explicitly null).
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but holds the wrong JSON type.
    #[error("field {field} has wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// A romanization value is neither a string nor an array of strings.
    #[error("bad romanization value: {0}")]
    BadRomanization(String),

    /// A stored timestamp cannot be represented as a calendar instant.
    #[error("timestamp out of range: {0}")]
    BadTimestamp(i64),
}
