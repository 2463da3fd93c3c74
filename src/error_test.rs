use super::*;

// =============================================================================
// StorageError
// =============================================================================

#[test]
fn backend_error_display_includes_message() {
    let err = StorageError::Backend("quota exceeded".to_owned());
    assert_eq!(err.to_string(), "storage backend error: quota exceeded");
}

#[test]
fn encode_error_wraps_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = StorageError::from(json_err);
    assert!(matches!(err, StorageError::Encode(_)));
    assert!(err.to_string().starts_with("failed to encode record:"));
}

// =============================================================================
// StoreError
// =============================================================================

#[test]
fn not_authenticated_display() {
    assert_eq!(StoreError::NotAuthenticated.to_string(), "not authenticated");
}

#[test]
fn not_found_display_includes_entity_and_id() {
    let err = StoreError::NotFound { entity: "collection", id: "c-123".to_owned() };
    assert_eq!(err.to_string(), "collection not found: c-123");
}

#[test]
fn storage_error_converts_into_store_error() {
    let err = StoreError::from(StorageError::Backend("denied".to_owned()));
    assert!(matches!(err, StoreError::Storage(_)));
    assert_eq!(err.to_string(), "storage error: storage backend error: denied");
}
