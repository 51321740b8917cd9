//! HTTP API for the Glint particle listing.

use std::sync::Arc;

use axum::{Router, extract::State, http::HeaderMap, response::Json, routing::get};
use glint_catalog::ParticleCatalog;
use glint_model::ParticleSummary;
use tracing::warn;

pub mod auth;
pub mod reply;
pub mod seed;

pub use auth::{AUTH_HEADER, SessionRegistry};
pub use reply::{MSG_LIST_OK, Reply};

/// Shared state behind every route.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ParticleCatalog>,
    pub sessions: Arc<SessionRegistry>,
}

async fn list_particles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Reply<Vec<ParticleSummary>>> {
    let identity = state.sessions.resolve(&headers);
    match state.catalog.list(identity.as_ref()) {
        Ok(records) => Json(Reply::ok(MSG_LIST_OK, records)),
        Err(err) => {
            warn!("particle listing failed: {err}");
            Json(Reply::error(err.to_string()))
        }
    }
}

/// Build the HTTP API router with the given application state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/Particle/List", get(list_particles))
        .with_state(state)
}
