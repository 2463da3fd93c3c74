//! Current-user session operations.
//!
//! The user slot is a singleton: one record, replaced wholesale on login
//! and flagged (not erased) on logout. `isLoggedIn` is the sole
//! authentication signal for the whole crate.

use tracing::warn;

use crate::error::StoreError;
use crate::ident;
use crate::storage;
use crate::types::{User, UserDraft};

use super::{Store, USER_KEY};

impl Store {
    /// Currently logged-in user, or `None` when the slot is absent,
    /// unreadable, or flagged logged out.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let raw = self.backend.get_item(USER_KEY)?;
        match storage::decode_slot::<User>(&raw) {
            Ok(user) if user.is_logged_in => Some(user),
            Ok(_) => None,
            Err(error) => {
                warn!(key = USER_KEY, %error, "unreadable user record; treating as logged out");
                None
            }
        }
    }

    /// Whether a logged-in user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Gatekeeper for owner-scoped operations.
    pub(crate) fn active_user(&self) -> Result<User, StoreError> {
        self.current_user().ok_or(StoreError::NotAuthenticated)
    }

    /// Normalize and persist the user record with `isLoggedIn` forced on
    /// (the login/registration path). Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] when the write fails.
    pub fn save_user(&self, draft: UserDraft) -> Result<User, StoreError> {
        let user = User::from_draft(draft, &ident::now_rfc3339());
        self.write_slot(USER_KEY, &user)?;
        Ok(user)
    }

    /// Flip the stored record to logged out, retaining it for the next
    /// login. Persistence failures are logged and swallowed.
    pub fn logout(&self) {
        let Some(mut user) = self.current_user() else {
            return;
        };
        user.is_logged_in = false;
        if let Err(error) = self.write_slot(USER_KEY, &user) {
            warn!(key = USER_KEY, %error, "failed to persist logout");
        }
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
