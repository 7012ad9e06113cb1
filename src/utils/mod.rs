//! Utility modules for browser access and logging.
//!
//! Provides:
//! - [`dom`] - window, storage, cookie and location helpers
//! - [`log`] - `tracing` subscriber writing to the browser console

pub mod dom;
pub mod log;
