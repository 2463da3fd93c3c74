//! Collection operations: save, list, lookup, delete, product membership.
//!
//! Membership edits (`add_product_to_collection`,
//! `remove_product_from_collection`) mutate the stored record in place and
//! keep its `user_id`; only a full `save_collection` re-stamps ownership.

use tracing::warn;

use crate::error::StoreError;
use crate::ident;
use crate::types::{Collection, CollectionDraft};

use super::{COLLECTIONS_KEY, Store};

impl Store {
    /// All collections, every user, in stored order.
    #[must_use]
    pub fn collections(&self) -> Vec<Collection> {
        self.read_list(COLLECTIONS_KEY)
    }

    /// Collections owned by `user_id`, in stored order.
    #[must_use]
    pub fn collections_for_user(&self, user_id: &str) -> Vec<Collection> {
        self.collections()
            .into_iter()
            .filter(|collection| collection.user_id == user_id)
            .collect()
    }

    /// Collection by id, any owner.
    #[must_use]
    pub fn collection(&self, id: &str) -> Option<Collection> {
        self.collections().into_iter().find(|collection| collection.id == id)
    }

    /// Insert or replace a collection (matched by id), stamped with the
    /// active user's ownership. Returns the normalized record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAuthenticated`] without a session and
    /// [`StoreError::Storage`] when the write fails.
    pub fn save_collection(&self, draft: CollectionDraft) -> Result<Collection, StoreError> {
        let user = self.active_user()?;
        let collection = Collection::from_draft(draft, &user.id, &ident::now_rfc3339());

        let mut collections = self.collections();
        match collections.iter_mut().find(|existing| existing.id == collection.id) {
            Some(existing) => *existing = collection.clone(),
            None => collections.push(collection.clone()),
        }
        self.write_slot(COLLECTIONS_KEY, &collections)?;
        Ok(collection)
    }

    /// Delete a collection by id. No session required: delete-time
    /// ownership is a product-only rule.
    ///
    /// Returns `false` only when the write failed; absent ids succeed.
    pub fn delete_collection(&self, id: &str) -> bool {
        let mut collections = self.collections();
        collections.retain(|collection| collection.id != id);
        match self.write_slot(COLLECTIONS_KEY, &collections) {
            Ok(()) => true,
            Err(error) => {
                warn!(key = COLLECTIONS_KEY, %error, "failed to persist collection delete");
                false
            }
        }
    }

    /// Add a product reference to a collection, keeping the list
    /// duplicate-free. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAuthenticated`] without a session,
    /// [`StoreError::NotFound`] when the collection does not exist, and
    /// [`StoreError::Storage`] when the write fails.
    pub fn add_product_to_collection(
        &self,
        collection_id: &str,
        product_id: &str,
    ) -> Result<(), StoreError> {
        self.active_user()?;

        let mut collections = self.collections();
        let collection = collections
            .iter_mut()
            .find(|collection| collection.id == collection_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "collection",
                id: collection_id.to_owned(),
            })?;

        if !collection.products.iter().any(|id| id == product_id) {
            collection.products.push(product_id.to_owned());
            self.write_slot(COLLECTIONS_KEY, &collections)?;
        }
        Ok(())
    }

    /// Remove a product reference from a collection. Removing an absent
    /// reference is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAuthenticated`] without a session,
    /// [`StoreError::NotFound`] when the collection does not exist, and
    /// [`StoreError::Storage`] when the write fails.
    pub fn remove_product_from_collection(
        &self,
        collection_id: &str,
        product_id: &str,
    ) -> Result<(), StoreError> {
        self.active_user()?;

        let mut collections = self.collections();
        let collection = collections
            .iter_mut()
            .find(|collection| collection.id == collection_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "collection",
                id: collection_id.to_owned(),
            })?;

        collection.products.retain(|id| id != product_id);
        self.write_slot(COLLECTIONS_KEY, &collections)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "collections_test.rs"]
mod tests;
