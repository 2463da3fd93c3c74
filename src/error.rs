//! Error types for the storage and store layers.
//!
//! DESIGN
//! ======
//! Two tiers of failure. `StorageError` covers the raw medium: the backend
//! refusing a write and JSON encoding. `StoreError` adds the domain rules
//! on top: an operation needed a session, or a record referenced by id is
//! missing. Read paths surface neither; they degrade to empty values so a
//! corrupt slot can never wedge the app.

/// Failure at the raw key-value medium.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing medium rejected the operation (quota exhaustion,
    /// storage access denied).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// A record could not be encoded as JSON for writing.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The operation is owner-scoped and no logged-in user is present.
    #[error("not authenticated")]
    NotAuthenticated,
    /// A record the operation requires does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. `"collection"`.
        entity: &'static str,
        /// The id that failed to resolve.
        id: String,
    },
    /// The write path failed at the storage layer.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
