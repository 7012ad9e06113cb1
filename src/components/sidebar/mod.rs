//! Sidebar listing every route flagged `sidebar`.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Link data for one sidebar entry.
#[derive(Clone)]
struct SidebarLink {
    name: &'static str,
    path: &'static str,
    icon: Option<icondata::Icon>,
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let links: Vec<SidebarLink> = ctx.navigator.with_value(|nav| {
        nav.table()
            .sidebar()
            .map(|def| SidebarLink {
                name: def.name,
                path: def.path,
                icon: def.view.and_then(ic::for_view),
            })
            .collect()
    });

    view! {
        <aside class=css::sidebar>
            <div class=css::title>{APP_NAME}</div>
            {links
                .into_iter()
                .map(|link| {
                    let is_active = move || ctx.route.with(|r| r.is_named(link.name));
                    let class = move || {
                        if is_active() {
                            format!("{} {}", css::link, css::active)
                        } else {
                            css::link.to_string()
                        }
                    };
                    view! {
                        <a class=class href=format!("#{}", link.path)>
                            {link.icon.map(|icon| view! { <Icon icon=icon /> })}
                            <span>{link.name}</span>
                        </a>
                    }
                })
                .collect_view()}
        </aside>
    }
}
