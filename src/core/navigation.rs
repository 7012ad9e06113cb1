//! Runs navigations against the browser.
//!
//! Builds a [`NavigationContext`] from the browser adapters, hands it to the
//! [`Navigator`](drive_nav::Navigator) and applies the result: publish the
//! entered route, fix up the address bar after redirects, or leave the app.

use drive_nav::{NavigationContext, NavigationResult, ResolvedRoute};
use leptos::prelude::*;
use tracing::error;

use crate::app::{AppContext, SignalBreadcrumbs};
use crate::core::{BrowserSession, CookieAuth};
use crate::utils::dom;

/// Navigate to the location currently in the URL hash.
pub fn sync_with_hash(ctx: AppContext) {
    navigate(ctx, &dom::get_hash());
}

/// Navigate to `location` (`/file/abc`).
pub fn navigate(ctx: AppContext, location: &str) {
    let auth = CookieAuth;
    let mut session = BrowserSession;
    let mut breadcrumbs = SignalBreadcrumbs(ctx.breadcrumbs);

    let result = ctx.navigator.try_update_value(|navigator| {
        let mut nav_ctx = NavigationContext::new(&auth, &mut session, &mut breadcrumbs);
        navigator.navigate(location, &mut nav_ctx)
    });

    match result {
        Some(Ok(NavigationResult::Entered { route, .. })) => {
            if let Some(hash) = corrected_hash(&dom::get_hash(), &route) {
                dom::replace_hash(&hash);
            }
            ctx.route.set(route);
        }
        Some(Ok(NavigationResult::Reload(href))) => dom::assign_location(&href),
        Some(Ok(NavigationResult::Unchanged)) => {}
        Some(Err(err)) => error!(location, %err, "navigation failed"),
        // App context already disposed.
        None => {}
    }
}

/// Hash to write back when the address bar disagrees with the entered
/// route (after a redirect, or an unnormalized location).
fn corrected_hash(current: &str, route: &ResolvedRoute) -> Option<String> {
    (current != route.full_path).then(|| format!("#{}", route.full_path))
}

#[cfg(test)]
mod tests {
    use drive_nav::RouteTable;

    use super::*;

    #[test]
    fn test_redirect_rewrites_hash() {
        let home = RouteTable::drive().resolve("/home").unwrap();
        assert_eq!(corrected_hash("/", &home), Some("#/home".to_string()));
    }

    #[test]
    fn test_unnormalized_location_rewrites_hash() {
        let file = RouteTable::drive().resolve("//file//abc").unwrap();
        assert_eq!(corrected_hash("//file//abc", &file), Some("#/file/abc".to_string()));
    }

    #[test]
    fn test_matching_hash_left_alone() {
        let file = RouteTable::drive().resolve("/file/abc?v=2").unwrap();
        assert_eq!(corrected_hash("/file/abc?v=2", &file), None);
    }
}
