//! Product operations: save, list, lookup, delete with collection cascade.

use tracing::warn;

use crate::error::StoreError;
use crate::ident;
use crate::types::{Product, ProductDraft};

use super::{COLLECTIONS_KEY, PRODUCTS_KEY, Store};

impl Store {
    /// All products, every user, in stored order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read_list(PRODUCTS_KEY)
    }

    /// Products owned by `user_id`, in stored order.
    #[must_use]
    pub fn products_for_user(&self, user_id: &str) -> Vec<Product> {
        self.products()
            .into_iter()
            .filter(|product| product.user_id == user_id)
            .collect()
    }

    /// Product by id, any owner.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<Product> {
        self.products().into_iter().find(|product| product.id == id)
    }

    /// Insert or replace a product (matched by id), stamped with the
    /// active user's ownership. Returns the normalized record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAuthenticated`] without a session and
    /// [`StoreError::Storage`] when the write fails.
    pub fn save_product(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let user = self.active_user()?;
        let product = Product::from_draft(draft, &user.id, &ident::now_rfc3339());

        let mut products = self.products();
        match products.iter_mut().find(|existing| existing.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        self.write_slot(PRODUCTS_KEY, &products)?;
        Ok(product)
    }

    /// Delete the active user's product by id and scrub the id from every
    /// collection's `products` list. Absent or foreign ids are a
    /// successful no-op. Dependent price trackings are left untouched.
    ///
    /// Returns `false` when no user is logged in or a write failed. The
    /// cascade is best-effort sequential: a collections-write failure can
    /// leave a removed product still referenced until the next successful
    /// delete.
    pub fn delete_product(&self, id: &str) -> bool {
        let Ok(user) = self.active_user() else {
            return false;
        };

        let mut products = self.products();
        products.retain(|product| !(product.id == id && product.user_id == user.id));
        if let Err(error) = self.write_slot(PRODUCTS_KEY, &products) {
            warn!(key = PRODUCTS_KEY, %error, "failed to persist product delete");
            return false;
        }

        let mut collections = self.collections();
        for collection in &mut collections {
            collection.products.retain(|product_id| product_id != id);
        }
        if let Err(error) = self.write_slot(COLLECTIONS_KEY, &collections) {
            warn!(key = COLLECTIONS_KEY, %error, "failed to persist collection cascade");
            return false;
        }
        true
    }
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
