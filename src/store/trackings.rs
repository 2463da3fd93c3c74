//! Price-tracking operations.
//!
//! Lifecycle is soft-delete only: removal flips `is_active` and every read
//! path filters on it, so dead entries stay in the slot but never surface.

use tracing::warn;

use crate::error::StoreError;
use crate::ident;
use crate::types::{PriceTracking, TrackingDraft};

use super::{PRICE_TRACKING_KEY, Store};

impl Store {
    /// All active trackings, every user, in stored order.
    #[must_use]
    pub fn price_trackings(&self) -> Vec<PriceTracking> {
        self.raw_trackings()
            .into_iter()
            .filter(|tracking| tracking.is_active)
            .collect()
    }

    /// Active trackings owned by `user_id`, in stored order.
    #[must_use]
    pub fn trackings_for_user(&self, user_id: &str) -> Vec<PriceTracking> {
        self.raw_trackings()
            .into_iter()
            .filter(|tracking| tracking.user_id == user_id && tracking.is_active)
            .collect()
    }

    /// The active user's tracking for `product_id`, if any. `None` when no
    /// session exists.
    #[must_use]
    pub fn tracking_for_product(&self, product_id: &str) -> Option<PriceTracking> {
        let user = self.current_user()?;
        self.trackings_for_user(&user.id)
            .into_iter()
            .find(|tracking| tracking.product_id == product_id)
    }

    /// Insert or replace a tracking entry (matched by id against the whole
    /// slot, soft-deleted entries included), stamped with the active
    /// user's ownership. Returns the normalized record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAuthenticated`] without a session and
    /// [`StoreError::Storage`] when the write fails.
    pub fn save_tracking(&self, draft: TrackingDraft) -> Result<PriceTracking, StoreError> {
        let user = self.active_user()?;
        let tracking = PriceTracking::from_draft(draft, &user.id, &ident::now_rfc3339());

        let mut trackings = self.raw_trackings();
        match trackings.iter_mut().find(|existing| existing.id == tracking.id) {
            Some(existing) => *existing = tracking.clone(),
            None => trackings.push(tracking.clone()),
        }
        self.write_slot(PRICE_TRACKING_KEY, &trackings)?;
        Ok(tracking)
    }

    /// Soft-delete the active entry with this id. Absent or
    /// already-inactive ids are a successful no-op.
    ///
    /// Returns `false` only when the write failed.
    pub fn remove_tracking(&self, id: &str) -> bool {
        let mut trackings = self.raw_trackings();
        let Some(entry) = trackings
            .iter_mut()
            .find(|tracking| tracking.id == id && tracking.is_active)
        else {
            return true;
        };
        entry.is_active = false;
        match self.write_slot(PRICE_TRACKING_KEY, &trackings) {
            Ok(()) => true,
            Err(error) => {
                warn!(key = PRICE_TRACKING_KEY, %error, "failed to persist tracking removal");
                false
            }
        }
    }

    /// The whole slot, soft-deleted entries included.
    fn raw_trackings(&self) -> Vec<PriceTracking> {
        self.read_list(PRICE_TRACKING_KEY)
    }
}

#[cfg(test)]
#[path = "trackings_test.rs"]
mod tests;
