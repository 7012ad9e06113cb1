//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use drive_nav::{Breadcrumb, BreadcrumbSink, NavigationGuard, Navigator, ResolvedRoute, RouteTable};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos reactive handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route currently on screen.
    pub route: RwSignal<ResolvedRoute>,
    /// Breadcrumb trail shown above the page.
    pub breadcrumbs: RwSignal<Vec<Breadcrumb>>,
    /// Route table, guard and the last entered route.
    pub navigator: StoredValue<Navigator>,
}

impl AppContext {
    pub fn new() -> Self {
        let navigator = Navigator::new(
            RouteTable::drive(),
            NavigationGuard::new(config::guard_config()),
        );
        Self {
            route: RwSignal::new(ResolvedRoute::start()),
            breadcrumbs: RwSignal::new(Vec::new()),
            navigator: StoredValue::new(navigator),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// [`BreadcrumbSink`] writing into the reactive breadcrumb signal.
pub struct SignalBreadcrumbs(pub RwSignal<Vec<Breadcrumb>>);

impl BreadcrumbSink for SignalBreadcrumbs {
    fn replace(&mut self, trail: Vec<Breadcrumb>) {
        self.0.set(trail);
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; font-family: sans-serif;">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
