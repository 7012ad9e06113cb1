//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the requested location**: every `hashchange` runs one
//!   navigation through the guard and recorder
//! - **AppContext.route is the entered location**: it only changes once a
//!   navigation proceeds, so a denied target never renders
//! - **Layout never re-renders on navigation**: only the outlet swaps views

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::sidebar::Sidebar;
use crate::components::views;
use crate::core::navigation;

stylance::import_crate_style!(css, "src/components/layout.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Runs the initial navigation for the URL the tab was opened with, then
/// one navigation per `hashchange`.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            navigation::sync_with_hash(ctx);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    navigation::sync_with_hash(ctx);

    view! {
        <div class=css::layout>
            <Sidebar />
            <main class=css::main>
                <Breadcrumbs />
                <RouteOutlet />
            </main>
        </div>
    }
}

// ============================================================================
// Route Outlet
// ============================================================================

/// Renders the view bound to the entered route.
///
/// Views are only constructed when their route is entered.
#[component]
fn RouteOutlet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    move || ctx.route.with(views::render)
}
