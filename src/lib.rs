//! Client-side persistence and session gating for a wishlist /
//! price-tracking app.
//!
//! All durable state lives in a string key-value medium (browser
//! `localStorage` in production, [`storage::MemoryBackend`] in tests and
//! on native hosts) under five fixed keys: the current-user singleton, the
//! product list, the collection list, the price-tracking list, and the
//! settings map. The [`Store`] gives typed CRUD over those slots; the
//! [`SessionGate`] derives page-access decisions and auth UI state from
//! the store's current user.
//!
//! Everything is synchronous and single-writer: each operation is a
//! read-modify-write of one whole JSON document, last write wins. Reads
//! never fail — absent or corrupt slots degrade to empty values — while
//! saves propagate [`StoreError`] so callers can react.
//!
//! Browser adapters (`localStorage` backend, location-based navigation,
//! DOM visibility sync) compile behind the `web` cargo feature.

pub mod error;
pub mod gate;
pub mod ident;
pub mod storage;
pub mod store;
pub mod types;
#[cfg(feature = "web")]
pub mod web;

pub use error::{StorageError, StoreError};
pub use gate::{AuthUi, GateConfig, Navigator, SessionGate};
pub use storage::{MemoryBackend, StorageBackend};
pub use store::Store;
pub use types::{
    Collection, CollectionDraft, PriceTracking, Product, ProductDraft, Settings, TrackingDraft,
    User, UserDraft,
};
#[cfg(feature = "web")]
pub use web::{BrowserNavigator, DomAuthUi, LocalStorageBackend};
