//! Client-side navigation policy for the drive web app.
//!
//! - [`RouteTable`] - static route definitions and path resolution
//! - [`NavigationGuard`] - before-each access decision and breadcrumb reset
//! - [`PostNavigationRecorder`] - after-each session marker update
//! - [`Navigator`] - runs one navigation through all of the above
//!
//! Browser state is never touched directly. Hosts implement
//! [`AuthStatus`], [`SessionStore`] and [`BreadcrumbSink`] and pass them in
//! through a [`NavigationContext`].

pub mod breadcrumb;
mod context;
mod error;
mod guard;
mod navigator;
mod recorder;
pub mod route;
pub mod session;
mod table;

pub use breadcrumb::Breadcrumb;
pub use context::{AuthStatus, BreadcrumbSink, NavigationContext, SessionStore};
pub use error::NavigationError;
pub use guard::{Access, GuardConfig, GuardOutcome, NavigationGuard};
pub use navigator::{MAX_REDIRECTS, NavigationResult, Navigator};
pub use recorder::{NavigationFailure, PostNavigationRecorder};
pub use route::{RedirectTo, RouteDefinition, RouteFlag, RouteMeta, ViewId};
pub use session::MemorySession;
pub use table::{HYBRID_ROUTE_NAMES, ResolvedRoute, RouteTable, drive_routes};
