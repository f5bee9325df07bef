//! # taskboard-client
//!
//! Leptos + WASM front-end core for the taskboard project/task-management
//! application. This crate holds the non-visual layers of the single-page
//! app: endpoint configuration, the localStorage-backed session store, the
//! HTTP access layer with normalized errors, typed services for the auth,
//! project, task, and team resources, and the shared authentication state.
//!
//! Pages and visual components consume these modules; they live in the
//! presentation layer and are not part of this crate.

pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod util;

/// Install the panic hook and console logger. Call once at startup,
/// before the first request is issued.
#[cfg(feature = "hydrate")]
pub fn init_browser() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
