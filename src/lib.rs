//! # newsdesk
//!
//! Leptos + WASM frontend for a news management application: articles,
//! authors, tags, and comments over a REST backend with JWT/OAuth2 auth.
//!
//! The crate is layered bottom-up: `net` (HTTP client, error translation,
//! wire types), `services` (per-resource REST wrappers), `state` (session
//! machine, list and toast state), `util` (JWT, storage, validation,
//! guards), then `pages` and `components` on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
