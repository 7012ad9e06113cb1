//! Collaborators the guard and recorder depend on.
//!
//! Nothing here reaches for ambient state: the host builds a
//! [`NavigationContext`] per navigation and hands it in by reference, so
//! tests can substitute in-memory fakes.

use crate::breadcrumb::Breadcrumb;
use crate::session;

/// Read-only view of the current authentication state.
pub trait AuthStatus {
    fn is_logged_in(&self) -> bool;
}

impl AuthStatus for bool {
    fn is_logged_in(&self) -> bool {
        *self
    }
}

/// Tab-scoped string key-value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Destination for breadcrumb trail updates.
pub trait BreadcrumbSink {
    /// Replace the whole trail.
    fn replace(&mut self, trail: Vec<Breadcrumb>);
}

impl BreadcrumbSink for Vec<Breadcrumb> {
    fn replace(&mut self, trail: Vec<Breadcrumb>) {
        *self = trail;
    }
}

/// Everything one navigation may read or mutate.
pub struct NavigationContext<'a> {
    pub auth: &'a dyn AuthStatus,
    pub session: &'a mut dyn SessionStore,
    pub breadcrumbs: &'a mut dyn BreadcrumbSink,
}

impl<'a> NavigationContext<'a> {
    pub fn new(
        auth: &'a dyn AuthStatus,
        session: &'a mut dyn SessionStore,
        breadcrumbs: &'a mut dyn BreadcrumbSink,
    ) -> Self {
        Self {
            auth,
            session,
            breadcrumbs,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in()
    }

    /// Href of the last completed navigation, empty before the first one.
    pub fn session_marker(&self) -> String {
        session::marker(&*self.session)
    }
}
