//! Session token handling.
//!
//! Sessions live in memory: a token is an opaque UUID minted at sign-in
//! and handed back in the `X-Auth-Token` header. An absent or unknown
//! token never fails a request; the caller is simply anonymous and the
//! access layer scopes them accordingly.

use std::collections::HashMap;
use std::sync::RwLock;

use axum::http::HeaderMap;
use glint_model::Identity;
use uuid::Uuid;

/// Request header carrying the session token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// In-memory session table mapping tokens to identities.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Identity>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh token for `identity`.
    pub fn issue(&self, identity: Identity) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .unwrap()
            .insert(token.clone(), identity);
        token
    }

    /// Resolves the caller's identity from the request headers.
    #[must_use]
    pub fn resolve(&self, headers: &HeaderMap) -> Option<Identity> {
        let token = headers.get(AUTH_HEADER)?.to_str().ok()?;
        self.sessions.read().unwrap().get(token).cloned()
    }

    /// Drops a session. Returns whether the token was live.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.write().unwrap().remove(token).is_some()
    }
}
