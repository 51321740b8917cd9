use axum::http::HeaderMap;
use glint_model::{Identity, Role};
use glint_server::{AUTH_HEADER, SessionRegistry};
use glint_types::UserId;

fn account(name: &str) -> Identity {
    Identity {
        id: UserId::new(),
        name: name.to_string(),
        role: Role::User,
    }
}

fn headers_with(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTH_HEADER, token.parse().unwrap());
    headers
}

#[test]
fn issued_token_resolves_to_the_identity() {
    let sessions = SessionRegistry::new();
    let alice = account("alice");
    let token = sessions.issue(alice.clone());

    assert_eq!(sessions.resolve(&headers_with(&token)), Some(alice));
}

#[test]
fn missing_header_resolves_to_anonymous() {
    let sessions = SessionRegistry::new();
    sessions.issue(account("alice"));

    assert_eq!(sessions.resolve(&HeaderMap::new()), None);
}

#[test]
fn unknown_token_resolves_to_anonymous() {
    let sessions = SessionRegistry::new();
    sessions.issue(account("alice"));

    assert_eq!(sessions.resolve(&headers_with("not-a-session")), None);
}

#[test]
fn revoke_forgets_the_session() {
    let sessions = SessionRegistry::new();
    let token = sessions.issue(account("alice"));

    assert!(sessions.revoke(&token));
    assert_eq!(sessions.resolve(&headers_with(&token)), None);
    assert!(!sessions.revoke(&token));
}

#[test]
fn every_issue_mints_a_distinct_token() {
    let sessions = SessionRegistry::new();
    let first = sessions.issue(account("alice"));
    let second = sessions.issue(account("alice"));

    assert_ne!(first, second);
}
