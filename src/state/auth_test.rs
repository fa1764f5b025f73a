use std::sync::Arc;

use super::*;
use crate::net::api::HttpSessionTransport;
use crate::session::SessionConfig;
use crate::session::storage::{MemoryCookieJar, MemoryTabStorage, RecordingNavigator, TabStorage as _};

fn session(cookies: &str, cached: Option<&str>) -> SessionManager<HttpSessionTransport> {
    let storage = Arc::new(MemoryTabStorage::new());
    if let Some(raw) = cached {
        storage.set_item("user", raw);
    }
    SessionManager::new(
        SessionConfig::default(),
        HttpSessionTransport::new("/auth/session"),
        storage,
        Arc::new(MemoryCookieJar::from_cookie_string(cookies)),
        Arc::new(RecordingNavigator::new()),
    )
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.role.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// snapshot
// =============================================================

#[test]
fn snapshot_of_empty_session() {
    assert_eq!(AuthState::snapshot(&session("", None)), AuthState::default());
}

#[test]
fn snapshot_reads_user_and_role() {
    let raw = r#"{"id":3,"account_id":9,"username":"carol","role":"moderator","discord_id":null}"#;
    let state = AuthState::snapshot(&session("auth_role=moderator", Some(raw)));

    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("carol"));
    assert_eq!(state.role, Some(Role::Moderator));
    assert!(!state.loading);
}

#[test]
fn snapshot_drops_unknown_role() {
    let state = AuthState::snapshot(&session("auth_role=owner", None));
    assert_eq!(state.role, None);
}

#[test]
fn begin_loading_keeps_identity() {
    let state = AuthState {
        user: None,
        role: Some(Role::Admin),
        loading: false,
    }
    .begin_loading();
    assert!(state.loading);
    assert_eq!(state.role, Some(Role::Admin));
}
