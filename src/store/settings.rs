//! Settings: one flat map of option name to JSON value.
//!
//! The only merge-on-save slot: saving patches the stored map key-by-key
//! instead of replacing the whole document.

use tracing::warn;

use crate::error::StoreError;
use crate::storage;
use crate::types::Settings;

use super::{SETTINGS_KEY, Store};

impl Store {
    /// The settings map; absent or unreadable slots are empty.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let Some(raw) = self.backend.get_item(SETTINGS_KEY) else {
            return Settings::new();
        };
        match storage::decode_slot(&raw) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(key = SETTINGS_KEY, %error, "unreadable settings; treating as empty");
                Settings::new()
            }
        }
    }

    /// Shallow-merge `patch` into the stored settings (last write wins per
    /// key), persist, and return the merged map. No session required.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] when the write fails.
    pub fn save_settings(&self, patch: Settings) -> Result<Settings, StoreError> {
        let mut settings = self.settings();
        settings.extend(patch);
        self.write_slot(SETTINGS_KEY, &settings)?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
