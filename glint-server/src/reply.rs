//! The response envelope the editor client expects.
//!
//! Every API call answers with transport status 200 and reports its real
//! outcome inside the envelope: the client switches on `code`, shows
//! `msg` verbatim, and only then reads `data`.

use serde::{Deserialize, Serialize};

/// Envelope code for a successful call.
pub const CODE_OK: i32 = 200;

/// Envelope code for a failed call.
pub const CODE_ERROR: i32 = 300;

/// Message sent with every successful listing.
pub const MSG_LIST_OK: &str = "Get Successfully!";

/// Envelope wrapping every API payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Reply<T> {
    /// A successful reply carrying `data`.
    pub fn ok(msg: impl Into<String>, data: T) -> Self {
        Self {
            code: CODE_OK,
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// A failed reply. The `data` key is left off the wire entirely.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_ERROR,
            msg: msg.into(),
            data: None,
        }
    }
}
