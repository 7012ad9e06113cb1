//! Before-each navigation guard.
//!
//! Decides, for every transition, whether the target may be entered:
//!
//! | target            | signed in          | signed out                       |
//! |-------------------|--------------------|----------------------------------|
//! | public            | redirect to `Home` | proceed                          |
//! | hybrid            | proceed            | proceed as guest                 |
//! | anything else     | proceed            | login (internal in dev, reload)  |
//!
//! Proceeding onto a route may first reset the breadcrumb trail, see
//! [`NavigationGuard::resets_breadcrumbs`].

use tracing::{debug, info};

use crate::breadcrumb;
use crate::context::NavigationContext;
use crate::route::RedirectTo;
use crate::table::{HYBRID_ROUTE_NAMES, ResolvedRoute};

/// Guard configuration, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Development build: send signed-out users to login without leaving
    /// the app. Production builds reload the page instead.
    pub dev_mode: bool,
    /// Route signed-in users land on when they hit a public route.
    pub home_route: &'static str,
    /// Login page path.
    pub login_path: &'static str,
}

impl GuardConfig {
    pub fn new(dev_mode: bool) -> Self {
        Self {
            dev_mode,
            ..Self::default()
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            home_route: "Home",
            login_path: "/login",
        }
    }
}

/// How a permitted navigation is being entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Signed in.
    Session,
    /// Signed out, on a public route.
    Public,
    /// Signed out, on a hybrid route.
    HybridGuest,
}

/// Decision for a single transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Enter the target.
    Proceed(Access),
    /// Cancel the target and navigate elsewhere inside the app.
    Redirect(RedirectTo),
    /// Cancel the target and leave the app with a full page load.
    Reload(String),
}

impl GuardOutcome {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }
}

/// The before-each guard.
#[derive(Clone, Debug)]
pub struct NavigationGuard {
    config: GuardConfig,
    hybrid_names: &'static [&'static str],
}

impl NavigationGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config,
            hybrid_names: &HYBRID_ROUTE_NAMES,
        }
    }

    /// Override the route names that trigger a breadcrumb reset.
    pub fn with_hybrid_names(mut self, names: &'static [&'static str]) -> Self {
        self.hybrid_names = names;
        self
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Decide whether `to` may be entered coming from `from`.
    ///
    /// May replace the breadcrumb trail as a side effect. Never fails.
    pub fn before_each(
        &self,
        to: &ResolvedRoute,
        from: &ResolvedRoute,
        ctx: &mut NavigationContext<'_>,
    ) -> GuardOutcome {
        let logged_in = ctx.is_logged_in();

        let outcome = if to.meta.is_public_route {
            if logged_in {
                GuardOutcome::Redirect(RedirectTo::Name(self.config.home_route))
            } else {
                GuardOutcome::Proceed(Access::Public)
            }
        } else if logged_in || to.meta.is_hybrid_route {
            if self.resets_breadcrumbs(to, from, &ctx.session_marker()) {
                info!(href = to.href(), "landing on shared item, resetting breadcrumbs");
                ctx.breadcrumbs.replace(breadcrumb::shared_root());
            }
            if logged_in {
                GuardOutcome::Proceed(Access::Session)
            } else {
                GuardOutcome::Proceed(Access::HybridGuest)
            }
        } else if self.config.dev_mode {
            GuardOutcome::Redirect(RedirectTo::Path(self.config.login_path))
        } else {
            GuardOutcome::Reload(self.config.login_path.to_string())
        };

        debug!(
            from = %from.full_path,
            to = %to.full_path,
            logged_in,
            ?outcome,
            "guard decision"
        );
        outcome
    }

    /// Whether entering `to` resets the breadcrumbs to the shared root.
    ///
    /// All three must hold: the target differs from the session marker,
    /// the source is `/` and the target is one of the hybrid route names.
    pub fn resets_breadcrumbs(&self, to: &ResolvedRoute, from: &ResolvedRoute, marker: &str) -> bool {
        to.href() != marker
            && from.full_path == "/"
            && to.name.is_some_and(|name| self.hybrid_names.contains(&name))
    }
}
