//! Sequences a single navigation through the route table, the guard and
//! the recorder.
//!
//! ```text
//! resolve ─▶ route redirect? ─▶ guard ─▶ proceed ─▶ record
//!               │                  ├──▶ redirect ─▶ (resolve again)
//!               └──────────────────┴──▶ reload ───▶ record (aborted)
//! ```
//!
//! Redirects keep the initial source location, so a chain that starts
//! at `/` still counts as a landing from `/`.

use tracing::{info, warn};

use crate::context::NavigationContext;
use crate::error::NavigationError;
use crate::guard::{Access, GuardOutcome, NavigationGuard};
use crate::recorder::{NavigationFailure, PostNavigationRecorder};
use crate::route::RedirectTo;
use crate::table::{ResolvedRoute, RouteTable};

/// Redirect hops allowed before a navigation is abandoned.
pub const MAX_REDIRECTS: usize = 8;

/// How a navigation ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationResult {
    /// The route was entered.
    Entered { route: ResolvedRoute, access: Access },
    /// The host must leave the app and load `href`.
    Reload(String),
    /// The target is already the current route.
    Unchanged,
}

/// Drives navigations one at a time and tracks the current route.
#[derive(Clone, Debug)]
pub struct Navigator {
    table: RouteTable,
    guard: NavigationGuard,
    recorder: PostNavigationRecorder,
    current: ResolvedRoute,
    max_redirects: usize,
}

impl Navigator {
    pub fn new(table: RouteTable, guard: NavigationGuard) -> Self {
        Self {
            table,
            guard,
            recorder: PostNavigationRecorder::new(),
            current: ResolvedRoute::start(),
            max_redirects: MAX_REDIRECTS,
        }
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// The last entered route, or the start location before the first.
    pub fn current(&self) -> &ResolvedRoute {
        &self.current
    }

    /// Navigate to `location`.
    ///
    /// The recorder runs exactly once per call that resolves a target,
    /// including aborted and failed navigations.
    pub fn navigate(
        &mut self,
        location: &str,
        ctx: &mut NavigationContext<'_>,
    ) -> Result<NavigationResult, NavigationError> {
        let from = self.current.clone();
        let mut target = self
            .table
            .resolve(location)
            .ok_or_else(|| NavigationError::NotFound(location.to_string()))?;

        if from.name.is_some() && target.full_path == from.full_path {
            let failure = NavigationFailure::Duplicated;
            self.recorder.after_each(&target, &from, Some(&failure), ctx);
            return Ok(NavigationResult::Unchanged);
        }

        let mut hops = 0;
        loop {
            let redirect = match target.redirect {
                Some(redirect) => redirect,
                None => match self.guard.before_each(&target, &from, ctx) {
                    GuardOutcome::Proceed(access) => {
                        self.recorder.after_each(&target, &from, None, ctx);
                        self.current = target.clone();
                        return Ok(NavigationResult::Entered {
                            route: target,
                            access,
                        });
                    }
                    GuardOutcome::Reload(href) => {
                        let failure = NavigationFailure::Aborted;
                        self.recorder.after_each(&target, &from, Some(&failure), ctx);
                        return Ok(NavigationResult::Reload(href));
                    }
                    GuardOutcome::Redirect(redirect) => redirect,
                },
            };

            hops += 1;
            let next = if hops > self.max_redirects {
                Err(NavigationError::RedirectLoop {
                    path: target.full_path.clone(),
                    hops,
                })
            } else {
                info!(from = %target.full_path, ?redirect, "redirecting");
                self.resolve_redirect(redirect)
            };

            match next {
                Ok(next) => target = next,
                Err(err) => {
                    warn!(%err, "navigation failed");
                    let failure = NavigationFailure::Error(err.clone());
                    self.recorder.after_each(&target, &from, Some(&failure), ctx);
                    return Err(err);
                }
            }
        }
    }

    fn resolve_redirect(&self, redirect: RedirectTo) -> Result<ResolvedRoute, NavigationError> {
        match redirect {
            RedirectTo::Name(name) => self.table.resolve_name(name, &[]),
            RedirectTo::Path(path) => self
                .table
                .resolve(path)
                .ok_or_else(|| NavigationError::NotFound(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumb::{self, Breadcrumb};
    use crate::guard::GuardConfig;
    use crate::route::{RouteDefinition, ViewId};
    use crate::session::{self, MemorySession};

    struct Harness {
        navigator: Navigator,
        session: MemorySession,
        trail: Vec<Breadcrumb>,
        logged_in: bool,
    }

    impl Harness {
        fn new(dev_mode: bool, logged_in: bool) -> Self {
            Self {
                navigator: Navigator::new(
                    RouteTable::drive(),
                    NavigationGuard::new(GuardConfig::new(dev_mode)),
                ),
                session: MemorySession::new(),
                trail: Vec::new(),
                logged_in,
            }
        }

        fn go(&mut self, location: &str) -> Result<NavigationResult, NavigationError> {
            let mut ctx =
                NavigationContext::new(&self.logged_in, &mut self.session, &mut self.trail);
            self.navigator.navigate(location, &mut ctx)
        }

        fn marker(&self) -> String {
            session::marker(&self.session)
        }

        fn entered(&mut self, location: &str) -> (ResolvedRoute, Access) {
            match self.go(location) {
                Ok(NavigationResult::Entered { route, access }) => (route, access),
                other => panic!("expected to enter {location}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_root_redirects_home_when_signed_in() {
        let mut h = Harness::new(false, true);
        let (route, access) = h.entered("/");
        assert!(route.is_named("Home"));
        assert_eq!(access, Access::Session);
        assert_eq!(h.marker(), "/home");
        assert!(h.navigator.current().is_named("Home"));
    }

    #[test]
    fn test_signed_out_prod_reloads_to_login() {
        let mut h = Harness::new(false, false);
        assert_eq!(h.go("/"), Ok(NavigationResult::Reload("/login".to_string())));
        // The aborted target is still recorded.
        assert_eq!(h.marker(), "/home");
        assert_eq!(h.navigator.current(), &ResolvedRoute::start());
    }

    #[test]
    fn test_signed_out_dev_redirects_to_login() {
        let mut h = Harness::new(true, false);
        let (route, access) = h.entered("/trash");
        assert!(route.is_named("Login"));
        assert_eq!(access, Access::Public);
        assert_eq!(h.marker(), "/login");
    }

    #[test]
    fn test_signed_in_login_redirects_home() {
        let mut h = Harness::new(true, true);
        let (route, _) = h.entered("/login");
        assert!(route.is_named("Home"));
    }

    #[test]
    fn test_shared_link_landing() {
        let mut h = Harness::new(false, false);
        let (route, access) = h.entered("/file/abc");
        assert!(route.is_named("File"));
        assert_eq!(access, Access::HybridGuest);
        assert_eq!(h.trail, breadcrumb::shared_root());
        assert_eq!(h.marker(), "/file/abc");
    }

    #[test]
    fn test_repeat_landing_with_messy_address_keeps_trail() {
        let mut h = Harness::new(false, false);
        h.session = MemorySession::with_marker("/file/abc");
        h.trail = vec![Breadcrumb::new("abc", "/file/abc")];
        let (route, _) = h.entered("//file//abc/#preview");
        assert_eq!(route.href(), "/file/abc");
        assert_eq!(h.trail, vec![Breadcrumb::new("abc", "/file/abc")]);
        assert_eq!(h.marker(), "/file/abc");
    }

    #[test]
    fn test_no_reset_after_first_landing() {
        let mut h = Harness::new(false, true);
        h.entered("/recent");
        h.trail = vec![Breadcrumb::new("Recent", "/recent")];
        h.entered("/folder/xyz");
        assert_eq!(h.trail, vec![Breadcrumb::new("Recent", "/recent")]);
        assert_eq!(h.marker(), "/folder/xyz");
    }

    #[test]
    fn test_duplicate_skips_guard_and_records() {
        let mut h = Harness::new(false, true);
        h.entered("/file/abc");
        h.trail.clear();
        assert_eq!(h.go("/file/abc"), Ok(NavigationResult::Unchanged));
        assert!(h.trail.is_empty());
        assert_eq!(h.marker(), "/file/abc");
    }

    #[test]
    fn test_unknown_path_hits_catch_all() {
        let mut h = Harness::new(false, true);
        let (route, _) = h.entered("/no/such/page");
        assert!(route.is_named("NotFound"));
    }

    #[test]
    fn test_not_found_without_catch_all() {
        let table = RouteTable::new(vec![RouteDefinition::new("/home", "Home", ViewId::Home)]);
        let mut navigator = Navigator::new(table, NavigationGuard::new(GuardConfig::default()));
        let mut session = MemorySession::new();
        let mut trail: Vec<Breadcrumb> = Vec::new();
        let mut ctx = NavigationContext::new(&true, &mut session, &mut trail);
        assert_eq!(
            navigator.navigate("/elsewhere", &mut ctx),
            Err(NavigationError::NotFound("/elsewhere".to_string()))
        );
        assert_eq!(session::marker(&session), "");
    }

    #[test]
    fn test_redirect_loop_is_reported_and_recorded() {
        let table = RouteTable::new(vec![
            RouteDefinition::redirect("/a", "A", RedirectTo::Path("/b")),
            RouteDefinition::redirect("/b", "B", RedirectTo::Path("/a")),
        ]);
        let mut navigator = Navigator::new(table, NavigationGuard::new(GuardConfig::default()))
            .with_max_redirects(3);
        let mut session = MemorySession::new();
        let mut trail: Vec<Breadcrumb> = Vec::new();
        let mut ctx = NavigationContext::new(&true, &mut session, &mut trail);

        let err = navigator.navigate("/a", &mut ctx).unwrap_err();
        assert!(matches!(err, NavigationError::RedirectLoop { hops: 4, .. }));
        assert!(!session::marker(&session).is_empty());
    }
}
