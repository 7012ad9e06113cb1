//! View bindings for the route table.
//!
//! Each [`ViewId`] maps to a constructor that only runs when the outlet
//! renders that route. Page bodies are owned by their feature modules;
//! these are the shells the router mounts.

use drive_nav::{Breadcrumb, ResolvedRoute, ViewId};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{LOGIN_PATH, SIGNUP_PATH};

/// Constructor for a view, given the route's props.
pub type ViewFn = fn(Vec<(String, String)>) -> AnyView;

/// Look up the constructor bound to `view`.
pub fn resolver(view: ViewId) -> ViewFn {
    match view {
        ViewId::Home => |_| view! { <Listing title="Home" route="/home" /> }.into_any(),
        ViewId::Recent => |_| view! { <Listing title="Recent" route="/recent" /> }.into_any(),
        ViewId::Favourites => |_| view! { <Listing title="Favourites" route="/favourites" /> }.into_any(),
        ViewId::Shared => |_| view! { <Listing title="Shared" route="/shared" /> }.into_any(),
        ViewId::Trash => |_| view! { <Listing title="Trash" route="/trash" /> }.into_any(),
        ViewId::Notifications => |_| view! { <Listing title="Notifications" route="/notifications" /> }.into_any(),
        ViewId::File => |props| view! { <Entity kind="File" props=props /> }.into_any(),
        ViewId::Folder => |props| view! { <Entity kind="Folder" props=props /> }.into_any(),
        ViewId::Document => |props| view! { <Entity kind="Document" props=props /> }.into_any(),
        ViewId::Login => |_| {
            view! { <Auth title="Log in" switch_label="Create an account" switch_to=SIGNUP_PATH /> }
                .into_any()
        },
        ViewId::Signup => |_| {
            view! { <Auth title="Sign up" switch_label="Already have an account? Log in" switch_to=LOGIN_PATH /> }
                .into_any()
        },
        ViewId::NotFound => |_| view! { <NotFound /> }.into_any(),
    }
}

/// Render the view bound to `route`, or nothing for redirect-only routes.
pub fn render(route: &ResolvedRoute) -> AnyView {
    match route.view {
        Some(view) => resolver(view)(route.view_props().to_vec()),
        None => ().into_any(),
    }
}

/// Top-level listing page. Starts a fresh breadcrumb trail.
#[component]
fn Listing(title: &'static str, route: &'static str) -> impl IntoView {
    if let Some(ctx) = use_context::<AppContext>() {
        ctx.breadcrumbs.set(vec![Breadcrumb::new(title, route)]);
    }

    view! { <h1>{title}</h1> }
}

#[component]
fn Entity(kind: &'static str, props: Vec<(String, String)>) -> impl IntoView {
    let name = props
        .into_iter()
        .find(|(key, _)| key == "entityName")
        .map(|(_, value)| value)
        .unwrap_or_default();

    // Extend the trail with this entity unless it is already the tip.
    if let Some(ctx) = use_context::<AppContext>() {
        let href = ctx.route.with_untracked(|r| r.full_path.clone());
        ctx.breadcrumbs.update(|trail| {
            if trail.last().is_none_or(|crumb| crumb.route != href) {
                trail.push(Breadcrumb::new(name.clone(), href));
            }
        });
    }

    view! {
        <h1>{kind}</h1>
        <p>{name}</p>
    }
}

/// In-app link to `path`. Plain paths would leave the app.
fn hash_link(path: &str) -> String {
    format!("#{path}")
}

/// Login and signup pages, each linking to the other.
#[component]
fn Auth(title: &'static str, switch_label: &'static str, switch_to: &'static str) -> impl IntoView {
    view! {
        <h1>{title}</h1>
        <a href=hash_link(switch_to)>{switch_label}</a>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <h1>"Page not found"</h1>
        <a href=hash_link("/home")>"Back to Home"</a>
    }
}

#[cfg(test)]
mod tests {
    use drive_nav::RouteTable;

    use super::*;

    #[test]
    fn test_auth_links_stay_in_app() {
        let table = RouteTable::drive();
        for (path, name) in [(LOGIN_PATH, "Login"), (SIGNUP_PATH, "Signup")] {
            let href = hash_link(path);
            assert!(href.starts_with("#/"));
            assert!(table.resolve(&href).unwrap().is_named(name));
        }
    }
}
