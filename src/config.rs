//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use drive_nav::GuardConfig;
use tracing::Level;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the sidebar header.
pub const APP_NAME: &str = "Drive";

// =============================================================================
// Build Mode
// =============================================================================

/// Development build.
///
/// Signed-out users are sent to the in-app login route instead of a full
/// page load of the server login page.
pub const DEV_MODE: bool = cfg!(debug_assertions);

/// Guard configuration for this build.
pub fn guard_config() -> GuardConfig {
    GuardConfig {
        dev_mode: DEV_MODE,
        home_route: HOME_ROUTE,
        login_path: LOGIN_PATH,
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Route signed-in users are sent to from public pages.
pub const HOME_ROUTE: &str = "Home";

/// Login page path.
pub const LOGIN_PATH: &str = "/login";

/// Signup page path.
pub const SIGNUP_PATH: &str = "/signup";

// =============================================================================
// Authentication
// =============================================================================

/// Cookie carrying the signed-in user id.
pub const USER_COOKIE: &str = "user_id";

/// `user_id` value the server sets for anonymous visitors.
pub const GUEST_USER: &str = "Guest";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: Level = if DEV_MODE { Level::DEBUG } else { Level::INFO };
