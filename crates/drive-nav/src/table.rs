//! Route table and path resolution.
//!
//! Resolution is first-match in declaration order over `/`-separated
//! segments:
//!
//! - static segments match literally
//! - `:name` captures exactly one segment
//! - `*name` captures the remainder of the path (possibly empty)
//!
//! Empty segments and trailing slashes are ignored and a `#fragment` is
//! dropped. A query string is kept in [`ResolvedRoute::full_path`] but never
//! matched.

use crate::error::NavigationError;
use crate::route::{RedirectTo, RouteDefinition, RouteFlag, RouteMeta, ViewId};

/// Route names whose first landing from `/` resets the breadcrumbs.
///
/// Independent of the `is_hybrid_route` flag;
/// [`RouteTable::hybrid_name_mismatches`] reports drift between the two.
pub const HYBRID_ROUTE_NAMES: [&str; 3] = ["File", "Folder", "Document"];

/// The drive application's routes, in match order.
pub fn drive_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::redirect("/", "Root", RedirectTo::Name("Home")),
        RouteDefinition::new("/home", "Home", ViewId::Home).meta(RouteMeta::sidebar()),
        RouteDefinition::new("/recent", "Recent", ViewId::Recent).meta(RouteMeta::sidebar()),
        RouteDefinition::new("/favourites", "Favourites", ViewId::Favourites)
            .meta(RouteMeta::sidebar()),
        RouteDefinition::new("/shared", "Shared", ViewId::Shared).meta(RouteMeta::sidebar()),
        RouteDefinition::new("/trash", "Trash", ViewId::Trash).meta(RouteMeta::sidebar()),
        RouteDefinition::new("/notifications", "Notifications", ViewId::Notifications)
            .meta(RouteMeta::sidebar()),
        RouteDefinition::new("/file/:entityName", "File", ViewId::File)
            .meta(RouteMeta::hybrid().with_file_page())
            .with_props(),
        RouteDefinition::new("/folder/:entityName", "Folder", ViewId::Folder)
            .meta(RouteMeta::hybrid())
            .with_props(),
        RouteDefinition::new("/document/:entityName", "Document", ViewId::Document)
            .meta(RouteMeta::hybrid().with_document_page())
            .with_props(),
        RouteDefinition::new("/login", "Login", ViewId::Login).meta(RouteMeta::public()),
        RouteDefinition::new("/signup", "Signup", ViewId::Signup).meta(RouteMeta::public()),
        RouteDefinition::new("/*pathMatch", "NotFound", ViewId::NotFound),
    ]
}

// ============================================================================
// Resolved Route
// ============================================================================

/// A concrete location matched against a [`RouteDefinition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Name of the matched route. `None` only for [`ResolvedRoute::start`].
    pub name: Option<&'static str>,
    /// Normalized path without query.
    pub path: String,
    /// Path plus query string, as navigated.
    pub full_path: String,
    /// Captured path params, in pattern order.
    pub params: Vec<(String, String)>,
    pub meta: RouteMeta,
    pub view: Option<ViewId>,
    pub props: bool,
    pub redirect: Option<RedirectTo>,
}

impl ResolvedRoute {
    /// The location every session starts from, before any navigation.
    pub fn start() -> Self {
        Self {
            name: None,
            path: "/".to_string(),
            full_path: "/".to_string(),
            params: Vec::new(),
            meta: RouteMeta::NONE,
            view: None,
            props: false,
            redirect: None,
        }
    }

    /// Address recorded in the session marker.
    ///
    /// The host uses hash URLs, so the href is the in-app full path.
    pub fn href(&self) -> &str {
        &self.full_path
    }

    /// Look up a captured param.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Params handed to the view (empty unless the route passes props).
    pub fn view_props(&self) -> &[(String, String)] {
        if self.props { self.params.as_slice() } else { &[] }
    }

    pub fn has(&self, flag: RouteFlag) -> bool {
        self.meta.has(flag)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == Some(name)
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Ordered, immutable collection of route definitions.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDefinition>) -> Self {
        Self { routes }
    }

    /// The drive application's table.
    pub fn drive() -> Self {
        Self::new(drive_routes())
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Check a flag on the route registered under `name`.
    pub fn is_classified(&self, name: &str, flag: RouteFlag) -> bool {
        self.by_name(name).is_some_and(|r| r.meta.has(flag))
    }

    /// Routes shown in the sidebar, in declaration order.
    pub fn sidebar(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter().filter(|r| r.meta.sidebar)
    }

    /// Resolve a raw location (`/file/abc`, `#/file/abc?x=1`).
    ///
    /// Returns `None` when no definition matches.
    pub fn resolve(&self, location: &str) -> Option<ResolvedRoute> {
        let full_path = normalize(location);
        let path = full_path
            .split_once('?')
            .map_or(full_path.as_str(), |(path, _)| path)
            .to_string();

        self.routes.iter().find_map(|def| {
            let params = match_pattern(def.path, &path)?;
            Some(ResolvedRoute {
                name: Some(def.name),
                path: path.clone(),
                full_path: full_path.clone(),
                params,
                meta: def.meta,
                view: def.view,
                props: def.props,
                redirect: def.redirect,
            })
        })
    }

    /// Build the location for a named route and resolve it.
    pub fn resolve_name(
        &self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<ResolvedRoute, NavigationError> {
        let def = self
            .by_name(name)
            .ok_or_else(|| NavigationError::UnknownRouteName(name.to_string()))?;

        let mut path = String::new();
        let mut defaulted = None;
        for segment in segments(def.path) {
            let value = match segment.strip_prefix([':', '*']) {
                Some(key) => {
                    let found = params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
                    match (found, segment.starts_with('*')) {
                        (Some(v), _) => v,
                        (None, true) => {
                            defaulted = Some(key);
                            ""
                        }
                        (None, false) => {
                            return Err(NavigationError::MissingParam {
                                route: def.name.to_string(),
                                param: key.to_string(),
                            });
                        }
                    }
                }
                None => segment,
            };
            if !value.is_empty() {
                path.push('/');
                path.push_str(value);
            }
        }

        let location = if path.is_empty() { "/" } else { path.as_str() };
        // An earlier route can shadow the built location (an empty wildcard
        // collapses to `/`), so the match must be the route asked for.
        match self.resolve(location) {
            Some(resolved) if resolved.name == Some(def.name) => Ok(resolved),
            _ => Err(match defaulted {
                Some(param) => NavigationError::MissingParam {
                    route: def.name.to_string(),
                    param: param.to_string(),
                },
                None => NavigationError::UnknownRouteName(name.to_string()),
            }),
        }
    }

    /// Names in [`HYBRID_ROUTE_NAMES`] whose route is missing or not flagged
    /// hybrid, followed by hybrid-flagged routes absent from the set.
    pub fn hybrid_name_mismatches(&self) -> Vec<&str> {
        let missing_flag = HYBRID_ROUTE_NAMES
            .iter()
            .copied()
            .filter(|name| !self.is_classified(name, RouteFlag::Hybrid));
        let missing_name = self
            .routes
            .iter()
            .filter(|r| r.meta.is_hybrid_route && !HYBRID_ROUTE_NAMES.contains(&r.name))
            .map(|r| r.name);
        missing_flag.chain(missing_name).collect()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::drive()
    }
}

/// Strip a leading `#` and any fragment after it, collapse empty segments
/// and guarantee a leading `/`.
fn normalize(location: &str) -> String {
    let location = location.trim().trim_start_matches('#');
    let location = location.split_once('#').map_or(location, |(before, _)| before);
    let (path, query) = match location.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (location, None),
    };

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in segments(path) {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        normalized.push('?');
        normalized.push_str(query);
    }
    normalized
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn match_pattern(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let actual: Vec<&str> = segments(path).collect();
    let mut params = Vec::new();
    let mut consumed = 0;

    for (i, segment) in segments(pattern).enumerate() {
        if let Some(name) = segment.strip_prefix('*') {
            params.push((name.to_string(), actual[i..].join("/")));
            return Some(params);
        }

        let value = actual.get(i)?;
        match segment.strip_prefix(':') {
            Some(name) => params.push((name.to_string(), value.to_string())),
            None if segment == *value => {}
            None => return None,
        }
        consumed = i + 1;
    }

    (consumed == actual.len()).then_some(params)
}
