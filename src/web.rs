//! Browser adapters for the storage backend and gate seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `web` feature. These are the thin `web-sys`
//! implementations of the seams the rest of the crate defines:
//! [`LocalStorageBackend`] for the persistence medium, [`BrowserNavigator`]
//! and [`DomAuthUi`] for the gate's side effects. Missing window, document,
//! or storage reads as absent and no-ops on writes where the contract
//! allows; only backend writes surface the failure.

use wasm_bindgen::{JsCast, JsValue};

use crate::error::StorageError;
use crate::gate::{AuthUi, Navigator};
use crate::storage::StorageBackend;

fn backend_error(context: &str, value: JsValue) -> StorageError {
    StorageError::Backend(format!("{context}: {value:?}"))
}

/// `localStorage` is re-fetched on every call; the browser can revoke
/// access at any time (private mode, storage permission changes).
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// [`StorageBackend`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    /// Create the backend. No handle is held; storage is looked up per call.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage()
            .ok_or_else(|| StorageError::Backend("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|error| backend_error("localStorage.setItem failed", error))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// [`Navigator`] over `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
}

/// [`AuthUi`] over the document.
///
/// Username placeholders are `[data-user-name]` elements; visibility groups
/// are `[data-logged-in]` and `[data-logged-out]`, toggled through
/// `style.display`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomAuthUi;

impl DomAuthUi {
    fn for_each_matching(selector: &str, apply: impl Fn(&web_sys::Element)) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return;
        };
        for index in 0..nodes.length() {
            if let Some(element) =
                nodes.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                apply(&element);
            }
        }
    }

    fn set_group_visible(selector: &str, visible: bool) {
        let display = if visible { "" } else { "none" };
        Self::for_each_matching(selector, |element| {
            if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.style().set_property("display", display);
            }
        });
    }
}

impl AuthUi for DomAuthUi {
    fn set_user_name(&self, username: &str) {
        Self::for_each_matching("[data-user-name]", |element| {
            element.set_text_content(Some(username));
        });
    }

    fn show_logged_in(&self, visible: bool) {
        Self::set_group_visible("[data-logged-in]", visible);
    }

    fn show_logged_out(&self, visible: bool) {
        Self::set_group_visible("[data-logged-out]", visible);
    }
}
