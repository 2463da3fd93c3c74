//! Identifier and timestamp generation for stored records.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

/// Generate a fresh record identifier (UUID v4, 36 characters).
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// First 8 characters of an id, used for default slug suffixes
/// (`user_xxxxxxxx`, `collection_xxxxxxxx`).
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Current UTC wall-clock time as an RFC 3339 string.
#[must_use]
pub fn now_rfc3339() -> String {
    // Rfc3339 formatting of a UTC timestamp only fails for years outside
    // 0..=9999, which the system clock cannot produce.
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
#[path = "ident_test.rs"]
mod tests;
