//! Browser-side navigation plumbing.
//!
//! This module provides:
//! - [`CookieAuth`] - authentication status from the `user_id` cookie
//! - [`BrowserSession`] - sessionStorage-backed session store
//! - [`navigation`] - runs navigations and applies their results

pub mod auth;
pub mod navigation;
mod session;

pub use auth::CookieAuth;
pub use session::BrowserSession;
