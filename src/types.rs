//! Stored record types and the draft inputs that produce them.
//!
//! DESIGN
//! ======
//! Records mirror the JSON documents kept in the storage slots, one field
//! per stored property, so serde round-trips stay lossless against data
//! written by earlier versions of the app. Every default lives in the
//! `from_draft` constructors; the store never patches fields after
//! construction. Drafts carry `Option`s for everything defaultable,
//! including `id` and `created_at`, so a loaded record can be fed back
//! through save unchanged (replace-by-id semantics).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ident;

/// Free-form application settings, merged key-by-key on save.
pub type Settings = HashMap<String, serde_json::Value>;

// =============================================================================
// USER
// =============================================================================

/// The current-user singleton record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name shown in the header and profile.
    pub username: String,
    /// Login email address.
    pub email: String,
    /// Public profile slug, e.g. `"user_1a2b3c4d"`.
    pub profile_url: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Whether this record represents a live session.
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
}

/// Caller-supplied fields for saving a user.
#[derive(Clone, Debug, Default)]
pub struct UserDraft {
    /// Existing id to replace, or `None` to generate one.
    pub id: Option<String>,
    /// Display name.
    pub username: String,
    /// Login email address.
    pub email: String,
    /// Profile slug override; defaults to `"user_"` plus the id prefix.
    pub profile_url: Option<String>,
    /// Creation timestamp override; defaults to now.
    pub created_at: Option<String>,
}

impl User {
    /// Build a logged-in user record from a draft, applying defaults.
    #[must_use]
    pub fn from_draft(draft: UserDraft, now: &str) -> Self {
        let id = draft.id.unwrap_or_else(ident::generate_id);
        let profile_url = draft
            .profile_url
            .unwrap_or_else(|| format!("user_{}", ident::short_id(&id)));
        Self {
            id,
            username: draft.username,
            email: draft.email,
            profile_url,
            created_at: draft.created_at.unwrap_or_else(|| now.to_owned()),
            is_logged_in: true,
        }
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

/// A wishlist product belonging to one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (UUID string).
    pub id: String,
    /// Owning user (UUID string).
    pub user_id: String,
    /// Product name.
    pub name: String,
    /// Price at the time the product was added.
    pub price: f64,
    /// Primary image URL, if any.
    pub image: Option<String>,
    /// Brand name, if known.
    pub brand: Option<String>,
    /// Merchant page URL, if known.
    pub url: Option<String>,
    /// Previous price before the last observed change, if any.
    pub old_price: Option<f64>,
    /// Most recently observed price.
    pub current_price: f64,
    /// Discount relative to `old_price`, in percent, if any.
    pub discount_percentage: Option<f64>,
    /// All known image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-text discount label (e.g. campaign name), if any.
    pub discount_info: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// Caller-supplied fields for saving a product.
#[derive(Clone, Debug, Default)]
pub struct ProductDraft {
    /// Existing id to replace, or `None` to generate one.
    pub id: Option<String>,
    /// Product name.
    pub name: String,
    /// Price at the time the product was added.
    pub price: f64,
    /// Primary image URL.
    pub image: Option<String>,
    /// Brand name.
    pub brand: Option<String>,
    /// Merchant page URL.
    pub url: Option<String>,
    /// Previous price before the last observed change.
    pub old_price: Option<f64>,
    /// Most recently observed price; defaults to `price`.
    pub current_price: Option<f64>,
    /// Discount relative to `old_price`, in percent.
    pub discount_percentage: Option<f64>,
    /// All known image URLs; defaults to `[image]` when an image is set.
    pub images: Option<Vec<String>>,
    /// Free-text discount label.
    pub discount_info: Option<String>,
    /// Creation timestamp override; defaults to now.
    pub created_at: Option<String>,
}

impl Product {
    /// Build a product record from a draft, applying defaults and stamping
    /// the owning user.
    #[must_use]
    pub fn from_draft(draft: ProductDraft, user_id: &str, now: &str) -> Self {
        let images = draft.images.unwrap_or_else(|| {
            draft.image.as_ref().map_or_else(Vec::new, |image| vec![image.clone()])
        });
        Self {
            id: draft.id.unwrap_or_else(ident::generate_id),
            user_id: user_id.to_owned(),
            name: draft.name,
            price: draft.price,
            image: draft.image,
            brand: draft.brand,
            url: draft.url,
            old_price: draft.old_price,
            current_price: draft.current_price.unwrap_or(draft.price),
            discount_percentage: draft.discount_percentage,
            images,
            discount_info: draft.discount_info,
            created_at: draft.created_at.unwrap_or_else(|| now.to_owned()),
        }
    }
}

// =============================================================================
// COLLECTION
// =============================================================================

/// A named grouping of products that can be shared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique collection identifier (UUID string).
    pub id: String,
    /// Owning user (UUID string).
    pub user_id: String,
    /// Collection name.
    pub name: String,
    /// Longer description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Collection category, e.g. `"favorites"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the collection is visible through its share link.
    pub is_public: bool,
    /// Public share slug, e.g. `"collection_1a2b3c4d"`.
    pub share_url: String,
    /// Product-id references (UUID strings). Weak references: the
    /// collection does not own the products it lists. Never contains
    /// duplicates.
    #[serde(default)]
    pub products: Vec<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// Caller-supplied fields for saving a collection.
#[derive(Clone, Debug, Default)]
pub struct CollectionDraft {
    /// Existing id to replace, or `None` to generate one.
    pub id: Option<String>,
    /// Collection name.
    pub name: String,
    /// Longer description; defaults to empty.
    pub description: Option<String>,
    /// Collection category; defaults to `"favorites"`.
    pub kind: Option<String>,
    /// Share-link visibility; defaults to `true`.
    pub is_public: Option<bool>,
    /// Share slug override; defaults to `"collection_"` plus the id prefix.
    pub share_url: Option<String>,
    /// Initial product-id references; defaults to empty.
    pub products: Option<Vec<String>>,
    /// Creation timestamp override; defaults to now.
    pub created_at: Option<String>,
}

impl Collection {
    /// Build a collection record from a draft, applying defaults and
    /// stamping the owning user.
    #[must_use]
    pub fn from_draft(draft: CollectionDraft, user_id: &str, now: &str) -> Self {
        let id = draft.id.unwrap_or_else(ident::generate_id);
        let share_url = draft
            .share_url
            .unwrap_or_else(|| format!("collection_{}", ident::short_id(&id)));
        Self {
            id,
            user_id: user_id.to_owned(),
            name: draft.name,
            description: draft.description.unwrap_or_default(),
            kind: draft.kind.unwrap_or_else(|| "favorites".to_owned()),
            is_public: draft.is_public.unwrap_or(true),
            share_url,
            products: draft.products.unwrap_or_default(),
            created_at: draft.created_at.unwrap_or_else(|| now.to_owned()),
        }
    }
}

// =============================================================================
// PRICE TRACKING
// =============================================================================

/// A price-watch entry for a product. Soft-deleted via `is_active`, never
/// physically removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceTracking {
    /// Unique tracking identifier (UUID string).
    pub id: String,
    /// Watched product (UUID string).
    pub product_id: String,
    /// Watching user (UUID string).
    pub user_id: String,
    /// Most recently observed price.
    pub current_price: f64,
    /// Price when tracking started.
    pub original_price: f64,
    /// Difference between the last two observed prices.
    #[serde(default)]
    pub price_change: f64,
    /// Soft-delete flag; inactive entries are invisible to reads.
    pub is_active: bool,
    /// Price at or below which the user wants to be alerted, if set.
    pub alert_price: Option<f64>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Timestamp of the last price check (RFC 3339).
    pub last_checked: String,
}

/// Caller-supplied fields for saving a price-watch entry.
#[derive(Clone, Debug, Default)]
pub struct TrackingDraft {
    /// Existing id to replace, or `None` to generate one.
    pub id: Option<String>,
    /// Watched product (UUID string).
    pub product_id: String,
    /// Most recently observed price.
    pub current_price: f64,
    /// Price when tracking started; defaults to `current_price`.
    pub original_price: Option<f64>,
    /// Difference between the last two observed prices; defaults to zero.
    pub price_change: Option<f64>,
    /// Soft-delete flag override; defaults to active.
    pub is_active: Option<bool>,
    /// Alert threshold price.
    pub alert_price: Option<f64>,
    /// Creation timestamp override; defaults to now.
    pub created_at: Option<String>,
    /// Last-check timestamp override; defaults to now.
    pub last_checked: Option<String>,
}

impl PriceTracking {
    /// Build a tracking record from a draft, applying defaults and stamping
    /// the owning user.
    #[must_use]
    pub fn from_draft(draft: TrackingDraft, user_id: &str, now: &str) -> Self {
        Self {
            id: draft.id.unwrap_or_else(ident::generate_id),
            product_id: draft.product_id,
            user_id: user_id.to_owned(),
            current_price: draft.current_price,
            original_price: draft.original_price.unwrap_or(draft.current_price),
            price_change: draft.price_change.unwrap_or(0.0),
            is_active: draft.is_active.unwrap_or(true),
            alert_price: draft.alert_price,
            created_at: draft.created_at.unwrap_or_else(|| now.to_owned()),
            last_checked: draft.last_checked.unwrap_or_else(|| now.to_owned()),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
