//! Storage backend abstraction over a string key-value medium.
//!
//! SYSTEM CONTEXT
//! ==============
//! Production runs against browser `localStorage`; tests and native hosts
//! run against an in-memory map. Both speak the same three-method trait so
//! the store never touches browser glue directly.
//!
//! ERROR HANDLING
//! ==============
//! Reads are infallible at this layer (`None` covers absent and unreadable
//! alike); writes surface a [`StorageError`] because callers must know when
//! a save did not land. Parsing a slot is a separate step, [`decode_slot`],
//! so decode failures stay visible as `Result`s before the store decides to
//! degrade them to empty values.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// A string key-value medium with `localStorage` semantics.
pub trait StorageBackend: Send + Sync {
    /// Read the raw string stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the medium rejects the write
    /// (quota exhaustion, storage access denied).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove_item(&self, key: &str);
}

/// In-memory backend for tests and non-browser hosts.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.lock().remove(key);
    }
}

/// Parse a raw slot value into a typed record.
///
/// # Errors
///
/// Returns the underlying `serde_json` error for malformed or wrong-shaped
/// JSON.
pub fn decode_slot<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
