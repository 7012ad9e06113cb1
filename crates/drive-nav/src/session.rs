//! Session marker: the href of the last completed navigation.

use std::collections::HashMap;

use crate::context::SessionStore;

/// Storage key holding the session marker.
pub const CURRENT_ROUTE_KEY: &str = "currentRoute";

/// Read the marker. A fresh session reads as the empty string.
pub fn marker(store: &dyn SessionStore) -> String {
    store.get(CURRENT_ROUTE_KEY).unwrap_or_default()
}

/// Overwrite the marker.
pub fn record(store: &mut dyn SessionStore, href: &str) {
    store.set(CURRENT_ROUTE_KEY, href);
}

/// In-memory [`SessionStore`] for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    entries: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose marker already points at `href`.
    pub fn with_marker(href: &str) -> Self {
        let mut session = Self::new();
        record(&mut session, href);
        session
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_marker() {
        assert_eq!(marker(&MemorySession::new()), "");
    }

    #[test]
    fn test_record_overwrites() {
        let mut session = MemorySession::with_marker("/home");
        assert_eq!(marker(&session), "/home");
        record(&mut session, "/file/abc");
        assert_eq!(marker(&session), "/file/abc");
        assert_eq!(session.get(CURRENT_ROUTE_KEY).as_deref(), Some("/file/abc"));
    }
}
