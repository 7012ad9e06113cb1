//! Navigation errors.
//!
//! The guard itself is total; these only arise while resolving named
//! targets or following redirect chains.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route is registered under this name.
    #[error("no route named '{0}'")]
    UnknownRouteName(String),

    /// A named target is missing a required path param.
    #[error("route '{route}' requires param '{param}'")]
    MissingParam { route: String, param: String },

    /// Redirects did not settle within the hop limit.
    #[error("redirect loop at '{path}' after {hops} hops")]
    RedirectLoop { path: String, hops: usize },

    /// No route matched and the table has no catch-all.
    #[error("no route matches '{0}'")]
    NotFound(String),
}
