//! Breadcrumb bar.
//!
//! Renders the trail from [`AppContext::breadcrumbs`]. Every entry but the
//! last is a link; the last one is the current page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/breadcrumbs/breadcrumbs.module.css");

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <nav class=css::trail>
            {move || {
                let trail = ctx.breadcrumbs.get();
                let last = trail.len().saturating_sub(1);
                trail
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let separator = (idx > 0).then(|| view! {
                            <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span>
                        });
                        let label = if idx == last {
                            view! { <span class=css::current>{crumb.label}</span> }.into_any()
                        } else {
                            let href = format!("#{}", crumb.route);
                            view! { <a class=css::crumb href=href>{crumb.label}</a> }.into_any()
                        };
                        view! { {separator} {label} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
