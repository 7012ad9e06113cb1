//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and the route outlet (main entry point)
//! - [`breadcrumbs`] - Breadcrumb bar
//! - [`sidebar`] - Navigation sidebar
//! - [`views`] - View bindings for each route
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod breadcrumbs;
pub mod icons;
pub mod router;
pub mod sidebar;
pub mod views;

pub use router::AppRouter;
