//! Cookie-backed authentication status.
//!
//! The server sets a `user_id` cookie on every response; anonymous visitors
//! carry `Guest`. The cookie is re-read on every check so a login in
//! another tab is picked up on the next navigation.

use drive_nav::AuthStatus;

use crate::config::{GUEST_USER, USER_COOKIE};
use crate::utils::dom;

/// Reads the signed-in user from `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieAuth;

impl AuthStatus for CookieAuth {
    fn is_logged_in(&self) -> bool {
        dom::document_cookie().is_some_and(|cookies| session_user(&cookies).is_some())
    }
}

/// Extract the signed-in user from a cookie header string.
///
/// Returns `None` for a missing, empty or `Guest` user id.
pub fn session_user(cookies: &str) -> Option<&str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == USER_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty() && *value != GUEST_USER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_user() {
        assert_eq!(
            session_user("sid=abc; user_id=jane%40example.com; system_user=yes"),
            Some("jane%40example.com")
        );
        assert_eq!(session_user("user_id=admin"), Some("admin"));
    }

    #[test]
    fn test_guest_is_signed_out() {
        assert_eq!(session_user("sid=Guest; user_id=Guest"), None);
    }

    #[test]
    fn test_missing_or_empty() {
        assert_eq!(session_user(""), None);
        assert_eq!(session_user("sid=abc"), None);
        assert_eq!(session_user("user_id="), None);
        // Prefix of another cookie name does not count.
        assert_eq!(session_user("other_user_id=bob"), None);
    }
}
