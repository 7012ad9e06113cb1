//! sessionStorage-backed session store.
//!
//! sessionStorage is scoped to the tab and cleared when it closes, which is
//! exactly the lifetime the session marker needs.

use drive_nav::SessionStore;
use tracing::warn;

use crate::utils::dom;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        dom::session_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = dom::session_storage() else {
            warn!(key, "sessionStorage unavailable");
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!(key, "failed to write sessionStorage");
        }
    }
}
