//! # propdash-client
//!
//! Leptos + WASM frontend for the property revenue dashboard.
//!
//! This crate contains the dashboard page, its selector and revenue panel
//! components, the explicit page state, and the REST helpers used to talk to
//! the `propdash-server` API. The server renders the same components through
//! the `ssr` feature; the browser hydrates them through `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
