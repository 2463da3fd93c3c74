//! The store: typed CRUD over five fixed storage slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! All durable app state lives in a string key-value medium under five
//! fixed keys: the current-user singleton, the product list, the
//! collection list, the price-tracking list, and the settings map. List
//! slots are shared across users; per-user views filter on `user_id` at
//! read time. Every operation is a synchronous read-modify-write of one
//! whole JSON document.
//!
//! DESIGN
//! ======
//! `Store` is a cheap-to-clone handle over an injected [`StorageBackend`];
//! consumers receive it by parameter, never through a global. Operations
//! are grouped one file per entity (`users`, `products`, `collections`,
//! `trackings`, `settings`), each an `impl Store` block sharing the
//! read/write plumbing defined here.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: absent or unreadable slots degrade to empty values
//! (logged at `warn`). Saves propagate storage failures. Delete-shaped
//! operations swallow storage failures into a `bool` so cleanup can never
//! block the primary action.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StorageError;
use crate::storage::{self, StorageBackend};

mod collections;
mod products;
mod settings;
mod trackings;
mod users;

/// Storage key for the current-user record.
const USER_KEY: &str = "wishya_user";
/// Storage key for the product list.
const PRODUCTS_KEY: &str = "wishya_products";
/// Storage key for the collection list.
const COLLECTIONS_KEY: &str = "wishya_collections";
/// Storage key for the price-tracking list.
const PRICE_TRACKING_KEY: &str = "wishya_price_tracking";
/// Storage key for the settings map.
const SETTINGS_KEY: &str = "wishya_settings";

const ALL_KEYS: [&str; 5] =
    [USER_KEY, PRODUCTS_KEY, COLLECTIONS_KEY, PRICE_TRACKING_KEY, SETTINGS_KEY];

/// Handle to the persistence layer.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Erase all five storage keys unconditionally (full session reset).
    pub fn clear_all(&self) {
        for key in ALL_KEYS {
            self.backend.remove_item(key);
        }
    }

    /// Read and decode a list slot. Absent or unreadable slots are empty.
    fn read_list<T: DeserializeOwned>(&self, key: &'static str) -> Vec<T> {
        let Some(raw) = self.backend.get_item(key) else {
            return Vec::new();
        };
        match storage::decode_slot(&raw) {
            Ok(list) => list,
            Err(error) => {
                warn!(key, %error, "unreadable slot; treating as empty");
                Vec::new()
            }
        }
    }

    /// Encode and write a whole slot document.
    fn write_slot<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key, &raw)
    }
}


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
