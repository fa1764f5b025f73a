//! # thumbnails-ui
//!
//! Leptos + WASM frontend for the level thumbnails site.
//!
//! This crate contains the session manager that mirrors the server session
//! into the browser tab, the route table with its auth guard, and the pages
//! the routes point at.

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

/// WASM entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
