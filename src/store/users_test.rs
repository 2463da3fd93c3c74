use super::*;
use crate::store::test_helpers::{login, memory_store};
use crate::storage::StorageBackend;

// =============================================================================
// current_user
// =============================================================================

#[test]
fn current_user_empty_store_is_none() {
    let (store, _backend) = memory_store();
    assert_eq!(store.current_user(), None);
}

#[test]
fn current_user_after_save_returns_record() {
    let (store, _backend) = memory_store();
    let saved = login(&store, "alice");
    assert_eq!(store.current_user(), Some(saved));
}

#[test]
fn current_user_filters_logged_out_record() {
    let (store, backend) = memory_store();
    backend
        .set_item(
            USER_KEY,
            r#"{"id":"u-1","username":"alice","email":"a@example.com","profile_url":"user_u1","created_at":"2024-05-01T12:00:00Z","isLoggedIn":false}"#,
        )
        .unwrap();
    assert_eq!(store.current_user(), None);
}

#[test]
fn current_user_corrupt_slot_is_none() {
    let (store, backend) = memory_store();
    backend.set_item(USER_KEY, "{not json").unwrap();
    assert_eq!(store.current_user(), None);
}

// =============================================================================
// is_authenticated / active_user
// =============================================================================

#[test]
fn is_authenticated_false_on_empty_store() {
    let (store, _backend) = memory_store();
    assert!(!store.is_authenticated());
}

#[test]
fn is_authenticated_true_after_login() {
    let (store, _backend) = memory_store();
    login(&store, "alice");
    assert!(store.is_authenticated());
}

#[test]
fn active_user_without_session_fails() {
    let (store, _backend) = memory_store();
    assert!(matches!(store.active_user(), Err(StoreError::NotAuthenticated)));
}

// =============================================================================
// save_user
// =============================================================================

#[test]
fn save_user_normalizes_and_returns_record() {
    let (store, _backend) = memory_store();
    let user = store
        .save_user(UserDraft {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            ..UserDraft::default()
        })
        .unwrap();
    assert_eq!(user.id.len(), 36);
    assert!(user.is_logged_in);
    assert_eq!(user.profile_url, format!("user_{}", &user.id[..8]));
}

#[test]
fn save_user_replaces_previous_record() {
    let (store, _backend) = memory_store();
    login(&store, "alice");
    let bob = login(&store, "bob");
    assert_eq!(store.current_user(), Some(bob));
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_hides_user_but_retains_record() {
    let (store, backend) = memory_store();
    let user = login(&store, "alice");
    store.logout();

    assert_eq!(store.current_user(), None);

    let raw = backend.get_item(USER_KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["id"], user.id.as_str());
    assert_eq!(stored["isLoggedIn"], false);
}

#[test]
fn logout_without_user_is_noop() {
    let (store, backend) = memory_store();
    store.logout();
    assert_eq!(backend.get_item(USER_KEY), None);
}

#[test]
fn logout_twice_is_idempotent() {
    let (store, _backend) = memory_store();
    login(&store, "alice");
    store.logout();
    store.logout();
    assert_eq!(store.current_user(), None);
}
