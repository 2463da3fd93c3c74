//! Session gate: page-level access decisions and auth UI sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into the gate once per load to decide whether the visitor may
//! stay, and to flip header chrome between its logged-in and logged-out
//! variants. All state lives in the [`Store`]; the gate owns only policy
//! (which paths are protected, where login and home live).
//!
//! DESIGN
//! ======
//! Side effects go through the [`Navigator`] and [`AuthUi`] seams so the
//! gate stays unit-testable with recording fakes; real browser adapters
//! live behind the `web` feature. This is advisory, client-enforced access
//! control only: the underlying slots are not protected from direct
//! tampering, and nothing here is a security boundary.

use crate::store::Store;
use crate::types::User;

/// Gate policy: which paths need a session and where to send visitors.
#[derive(Clone, Debug)]
pub struct GateConfig {
    /// Path prefixes that require a logged-in user.
    pub protected_prefixes: Vec<String>,
    /// Destination for unauthenticated visitors.
    pub login_path: String,
    /// Destination after logout.
    pub home_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: vec![
                "/dashboard".to_owned(),
                "/profile".to_owned(),
                "/collections".to_owned(),
            ],
            login_path: "/login".to_owned(),
            home_path: "/".to_owned(),
        }
    }
}

/// Page navigation seam.
pub trait Navigator {
    /// Navigate the page to `url`.
    fn navigate_to(&self, url: &str);
}

/// Auth-dependent UI seam: username placeholders and element visibility.
pub trait AuthUi {
    /// Fill every username placeholder with `username`.
    fn set_user_name(&self, username: &str);
    /// Show or hide elements marked visible-when-logged-in.
    fn show_logged_in(&self, visible: bool);
    /// Show or hide elements marked visible-when-logged-out.
    fn show_logged_out(&self, visible: bool);
}

/// Access-control component over the store's current-user state.
#[derive(Clone)]
pub struct SessionGate {
    store: Store,
    config: GateConfig,
}

impl SessionGate {
    /// Gate with the default policy.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_config(store, GateConfig::default())
    }

    /// Gate with an explicit policy.
    #[must_use]
    pub fn with_config(store: Store, config: GateConfig) -> Self {
        Self { store, config }
    }

    /// Snapshot of the logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.store.current_user()
    }

    /// Whether a logged-in user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Let an authenticated visitor through; send anyone else to the login
    /// page. Returns whether the caller may proceed.
    pub fn require_auth(&self, navigator: &dyn Navigator) -> bool {
        if self.is_authenticated() {
            return true;
        }
        navigator.navigate_to(&self.config.login_path);
        false
    }

    /// Page-load hook. Unauthenticated visitors on a protected `path` are
    /// redirected to login carrying the original path as a `redirect`
    /// parameter; everyone else gets the UI synced from one user snapshot.
    pub fn guard_page_load(&self, path: &str, navigator: &dyn Navigator, ui: &dyn AuthUi) {
        let user = self.current_user();

        if user.is_none() && is_protected_path(path, &self.config.protected_prefixes) {
            navigator.navigate_to(&login_redirect_url(&self.config.login_path, path));
            return;
        }

        match &user {
            Some(user) => {
                ui.set_user_name(&user.username);
                ui.show_logged_in(true);
                ui.show_logged_out(false);
            }
            None => {
                ui.show_logged_in(false);
                ui.show_logged_out(true);
            }
        }
    }

    /// End the session and navigate home.
    pub fn logout(&self, navigator: &dyn Navigator) {
        self.store.logout();
        navigator.navigate_to(&self.config.home_path);
    }
}

/// Whether `path` falls under any protected prefix.
#[must_use]
pub fn is_protected_path(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

/// Login URL carrying the original path as a percent-encoded `redirect`
/// parameter.
#[must_use]
pub fn login_redirect_url(login_path: &str, path: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", path)
        .finish();
    format!("{login_path}?{query}")
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
