//! Route definitions and classification flags.
//!
//! A [`RouteDefinition`] is a static record: path pattern, unique name,
//! lazy view handle and [`RouteMeta`] flags. Definitions are built once
//! at startup and never mutated.

use serde::Serialize;

/// A single classification flag a route may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteFlag {
    /// Only for signed-out users (login, signup).
    Public,
    /// Reachable with or without a session (shared links).
    Hybrid,
    /// Listed in the sidebar.
    Sidebar,
    /// Renders a single file.
    FilePage,
    /// Renders a collaborative document.
    DocumentPage,
}

/// Classification flags attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub is_public_route: bool,
    pub is_hybrid_route: bool,
    pub sidebar: bool,
    pub file_page: bool,
    pub document_page: bool,
}

impl RouteMeta {
    /// No flags set.
    pub const NONE: Self = Self {
        is_public_route: false,
        is_hybrid_route: false,
        sidebar: false,
        file_page: false,
        document_page: false,
    };

    pub const fn public() -> Self {
        Self {
            is_public_route: true,
            ..Self::NONE
        }
    }

    pub const fn hybrid() -> Self {
        Self {
            is_hybrid_route: true,
            ..Self::NONE
        }
    }

    pub const fn sidebar() -> Self {
        Self {
            sidebar: true,
            ..Self::NONE
        }
    }

    pub const fn with_file_page(self) -> Self {
        Self {
            file_page: true,
            ..self
        }
    }

    pub const fn with_document_page(self) -> Self {
        Self {
            document_page: true,
            ..self
        }
    }

    /// Check whether a flag is set.
    pub fn has(&self, flag: RouteFlag) -> bool {
        match flag {
            RouteFlag::Public => self.is_public_route,
            RouteFlag::Hybrid => self.is_hybrid_route,
            RouteFlag::Sidebar => self.sidebar,
            RouteFlag::FilePage => self.file_page,
            RouteFlag::DocumentPage => self.document_page,
        }
    }
}

/// Lazy view handle.
///
/// The host maps each variant to a constructor that is only invoked when
/// the route is actually rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Recent,
    Favourites,
    Shared,
    Trash,
    Notifications,
    File,
    Folder,
    Document,
    Login,
    Signup,
    NotFound,
}

/// Where a redirecting route sends the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTo {
    /// Redirect to the route registered under this name.
    Name(&'static str),
    /// Redirect to a literal path.
    Path(&'static str),
}

/// A static route record.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteDefinition {
    /// Path pattern (`/file/:entityName`, `/*pathMatch`).
    pub path: &'static str,
    /// Unique route name.
    pub name: &'static str,
    /// View bound to the route. `None` for pure redirects.
    pub view: Option<ViewId>,
    pub meta: RouteMeta,
    /// Pass captured path params to the view.
    pub props: bool,
    pub redirect: Option<RedirectTo>,
}

impl RouteDefinition {
    /// A route rendering `view` with no flags.
    pub const fn new(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self {
            path,
            name,
            view: Some(view),
            meta: RouteMeta::NONE,
            props: false,
            redirect: None,
        }
    }

    /// A route that never renders and forwards to `target`.
    pub const fn redirect(path: &'static str, name: &'static str, target: RedirectTo) -> Self {
        Self {
            path,
            name,
            view: None,
            meta: RouteMeta::NONE,
            props: false,
            redirect: Some(target),
        }
    }

    pub const fn meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub const fn with_props(mut self) -> Self {
        self.props = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_flags() {
        let meta = RouteMeta::hybrid().with_file_page();
        assert!(meta.has(RouteFlag::Hybrid));
        assert!(meta.has(RouteFlag::FilePage));
        assert!(!meta.has(RouteFlag::Public));
        assert!(!meta.has(RouteFlag::DocumentPage));
        assert!(!meta.has(RouteFlag::Sidebar));
    }

    #[test]
    fn test_meta_default_is_empty() {
        assert_eq!(RouteMeta::default(), RouteMeta::NONE);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let json = serde_json::to_value(RouteMeta::public()).unwrap();
        assert_eq!(json["isPublicRoute"], true);
        assert_eq!(json["isHybridRoute"], false);
        assert_eq!(json["documentPage"], false);
    }

    #[test]
    fn test_builders() {
        let def = RouteDefinition::new("/file/:entityName", "File", ViewId::File)
            .meta(RouteMeta::hybrid())
            .with_props();
        assert_eq!(def.view, Some(ViewId::File));
        assert!(def.props);
        assert!(def.redirect.is_none());

        let redirect = RouteDefinition::redirect("/", "Root", RedirectTo::Name("Home"));
        assert_eq!(redirect.view, None);
        assert_eq!(redirect.redirect, Some(RedirectTo::Name("Home")));
    }
}
