use std::collections::BTreeSet;
use std::sync::Arc;

use glint_catalog::{CATEGORY_COLLECTION, CatalogConfig, PARTICLE_COLLECTION, ParticleCatalog};
use glint_model::{Document, Identity, Role};
use glint_server::{AUTH_HEADER, AppState, MSG_LIST_OK, SessionRegistry, build_router};
use glint_store::DocumentStore;
use glint_types::UserId;
use serde_json::{Value, json};

struct TestServer {
    base: String,
    sessions: Arc<SessionRegistry>,
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_server(store: Arc<DocumentStore>, enforced: bool) -> TestServer {
    let sessions = Arc::new(SessionRegistry::new());
    let catalog = Arc::new(ParticleCatalog::new(
        store,
        CatalogConfig {
            ownership_enforced: enforced,
            max_results: None,
        },
    ));
    let state = AppState {
        catalog,
        sessions: Arc::clone(&sessions),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        sessions,
    }
}

fn signed_in(sessions: &SessionRegistry, name: &str, role: Role) -> (Identity, String) {
    let identity = Identity {
        id: UserId::new(),
        name: name.to_string(),
        role,
    };
    let token = sessions.issue(identity.clone());
    (identity, token)
}

fn seed_particle(store: &DocumentStore, id: &str, owner: Option<UserId>, created_at: i64, body: Value) {
    let doc = Document {
        id: id.to_string(),
        owner,
        created_at,
        updated_at: created_at,
        data: body,
    };
    store.insert(PARTICLE_COLLECTION, &doc).unwrap();
}

fn seed_category(store: &DocumentStore, id: &str, name: &str, kind: &str) {
    let doc = Document {
        id: id.to_string(),
        owner: None,
        created_at: 1,
        updated_at: 1,
        data: json!({"name": name, "kind": kind}),
    };
    store.insert(CATEGORY_COLLECTION, &doc).unwrap();
}

async fn list(base: &str, token: Option<&str>) -> Value {
    let client = reqwest::Client::new();
    let mut request = client.get(format!("{}/api/Particle/List", base));
    if let Some(token) = token {
        request = request.header(AUTH_HEADER, token);
    }
    let resp = request.send().await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn listing_succeeds_with_the_editor_envelope() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(Arc::clone(&store), true).await;
    let (alice, token) = signed_in(&server.sessions, "alice", Role::User);
    seed_category(&store, "C1", "Fire", "Particle");
    seed_particle(
        &store,
        "p1",
        Some(alice.id),
        100,
        json!({"name": "Flame", "category": "C1"}),
    );

    let body = list(&server.base, Some(&token)).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["msg"], MSG_LIST_OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["ID"], "p1");
    assert_eq!(body["data"][0]["Name"], "Flame");
    assert_eq!(body["data"][0]["CategoryID"], "C1");
    assert_eq!(body["data"][0]["CategoryName"], "Fire");
}

#[tokio::test]
async fn envelope_and_records_use_exactly_the_editor_keys() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(Arc::clone(&store), true).await;
    let (alice, token) = signed_in(&server.sessions, "alice", Role::User);
    seed_particle(&store, "p1", Some(alice.id), 100, json!({"name": "Flame"}));

    let body = list(&server.base, Some(&token)).await;

    let envelope_keys: BTreeSet<&str> =
        body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(envelope_keys, BTreeSet::from(["code", "msg", "data"]));

    let record_keys: BTreeSet<&str> = body["data"][0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        record_keys,
        BTreeSet::from([
            "ID",
            "Name",
            "CategoryID",
            "CategoryName",
            "TotalPinYin",
            "FirstPinYin",
            "CreateTime",
            "UpdateTime",
            "Thumbnail",
        ])
    );
}

#[tokio::test]
async fn anonymous_caller_gets_an_empty_data_array() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(Arc::clone(&store), true).await;
    seed_particle(&store, "p1", Some(UserId::new()), 100, json!({"name": "Flame"}));

    let body = list(&server.base, None).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn unknown_token_is_treated_as_anonymous() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(Arc::clone(&store), true).await;
    seed_particle(&store, "p1", Some(UserId::new()), 100, json!({"name": "Flame"}));

    let body = list(&server.base, Some("no-such-session")).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn listing_is_scoped_by_token() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(Arc::clone(&store), true).await;
    let (alice, alice_token) = signed_in(&server.sessions, "alice", Role::User);
    let (bob, bob_token) = signed_in(&server.sessions, "bob", Role::User);
    seed_particle(&store, "a1", Some(alice.id), 100, json!({"name": "Flame"}));
    seed_particle(&store, "b1", Some(bob.id), 200, json!({"name": "Smoke"}));

    let alice_body = list(&server.base, Some(&alice_token)).await;
    assert_eq!(alice_body["data"].as_array().unwrap().len(), 1);
    assert_eq!(alice_body["data"][0]["ID"], "a1");

    let bob_body = list(&server.base, Some(&bob_token)).await;
    assert_eq!(bob_body["data"].as_array().unwrap().len(), 1);
    assert_eq!(bob_body["data"][0]["ID"], "b1");
}

#[tokio::test]
async fn admin_token_sees_unowned_documents() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(Arc::clone(&store), true).await;
    let (root, root_token) = signed_in(&server.sessions, "root", Role::Administrator);
    seed_particle(&store, "own", Some(root.id), 100, json!({"name": "Flame"}));
    seed_particle(&store, "other", Some(UserId::new()), 200, json!({"name": "Smoke"}));
    seed_particle(&store, "shared", None, 300, json!({"name": "Spark"}));

    let body = list(&server.base, Some(&root_token)).await;

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["ID"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["shared", "own"]);
}

#[tokio::test]
async fn open_access_serves_everything_without_a_token() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(Arc::clone(&store), false).await;
    seed_particle(&store, "p1", Some(UserId::new()), 100, json!({"name": "Flame"}));
    seed_particle(&store, "p2", None, 200, json!({"name": "Spark"}));

    let body = list(&server.base, None).await;

    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn store_failure_maps_to_code_300() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docs.db");
    let path = path.to_str().unwrap();
    let store = Arc::new(DocumentStore::open(path).unwrap());
    let server = spawn_server(Arc::clone(&store), true).await;
    let (_alice, token) = signed_in(&server.sessions, "alice", Role::User);

    let raw = rusqlite::Connection::open(path).unwrap();
    raw.execute("DROP TABLE documents", []).unwrap();
    drop(raw);

    let body = list(&server.base, Some(&token)).await;

    assert_eq!(body["code"], 300);
    assert!(body["msg"].as_str().unwrap().contains("storage error"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let server = spawn_server(store, true).await;

    let resp = reqwest::get(format!("{}/api/Scene/List", server.base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}
