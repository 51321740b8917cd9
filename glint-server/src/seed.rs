//! First-run data: the administrator session and an optional demo
//! library so a fresh store has something to list.

use glint_catalog::{CATEGORY_COLLECTION, PARTICLE_COLLECTION, PARTICLE_KIND};
use glint_model::{Category, Document, Identity, Particle, Role, romanization};
use glint_store::{DocumentStore, StoreResult};
use glint_types::{AssetId, CategoryId, UserId, now_millis};
use serde_json::json;
use tracing::info;

use crate::auth::SessionRegistry;

/// Demo account created by seeding, with a live session token.
#[derive(Debug, Clone)]
pub struct DemoAccess {
    pub editor: Identity,
    pub editor_token: String,
}

/// Creates the administrator account and opens a session for it.
///
/// The account exists only for this process; its token is printed at
/// startup so an operator can sign the editor in immediately.
pub fn bootstrap_admin(sessions: &SessionRegistry) -> (Identity, String) {
    let admin = Identity {
        id: UserId::new(),
        name: "Administrator".to_string(),
        role: Role::Administrator,
    };
    let token = sessions.issue(admin.clone());
    (admin, token)
}

/// Installs a small taxonomy and particle library into an empty store.
///
/// A store that already holds particles is left untouched and `None`
/// comes back, so repeated `--seed` runs stay harmless.
pub fn install_demo_data(
    store: &DocumentStore,
    sessions: &SessionRegistry,
) -> StoreResult<Option<DemoAccess>> {
    if store.count(PARTICLE_COLLECTION)? > 0 {
        info!("store already holds particles, skipping demo data");
        return Ok(None);
    }

    let categories = [
        ("fire", "Fire", PARTICLE_KIND),
        ("water", "Water", PARTICLE_KIND),
        ("town", "Town", "Scene"),
    ];
    for (id, name, kind) in categories {
        let category = Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            kind: kind.to_string(),
        };
        store.insert(CATEGORY_COLLECTION, &category.to_document())?;
    }

    let editor = Identity {
        id: UserId::new(),
        name: "demo".to_string(),
        role: Role::User,
    };
    let editor_token = sessions.issue(editor.clone());

    // Editor uploads store romanization as syllable arrays; keep the demo
    // data in that shape.
    let now = now_millis();
    let flame = Document {
        id: AssetId::new().to_string(),
        owner: Some(editor.id),
        created_at: now - 2_000,
        updated_at: now - 2_000,
        data: json!({
            "name": "Flame",
            "category": "fire",
            "total_pinyin": romanization::encode(&["huo", "yan"]),
            "first_pinyin": romanization::encode(&["h", "y"]),
        }),
    };
    store.insert(PARTICLE_COLLECTION, &flame)?;

    let particles = [
        Particle {
            id: AssetId::new().to_string(),
            name: "Rain".to_string(),
            category: Some(CategoryId::new("water")),
            total_pinyin: "yudi".to_string(),
            first_pinyin: "yd".to_string(),
            created_at: now - 1_000,
            updated_at: now - 1_000,
            thumbnail: Some("/assets/thumbnails/rain.png".to_string()),
            owner: Some(editor.id),
        },
        // Owned by an account with no session: visible to nobody signed
        // in here, so scoping is observable straight from the demo data.
        Particle {
            id: AssetId::new().to_string(),
            name: "Ember".to_string(),
            category: Some(CategoryId::new("fire")),
            total_pinyin: "yuhuo".to_string(),
            first_pinyin: "yh".to_string(),
            created_at: now - 500,
            updated_at: now - 500,
            thumbnail: None,
            owner: Some(UserId::new()),
        },
        Particle {
            id: AssetId::new().to_string(),
            name: "Starfield".to_string(),
            category: None,
            total_pinyin: String::new(),
            first_pinyin: String::new(),
            created_at: now,
            updated_at: now,
            thumbnail: None,
            owner: None,
        },
    ];
    for particle in &particles {
        store.insert(PARTICLE_COLLECTION, &particle.to_document())?;
    }

    info!(
        "installed demo data: {} categories, {} particles",
        categories.len(),
        particles.len() + 1
    );
    Ok(Some(DemoAccess {
        editor,
        editor_token,
    }))
}
