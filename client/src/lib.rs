//! # weatherdesk-client
//!
//! Leptos + WASM front-end for the weather-platform admin dashboard.
//!
//! This crate contains the session store, the route guard, the HTTP wrapper
//! with its typed error channel, and the auth and dashboard pages. The
//! `weatherdesk-server` crate renders it with SSR; the `hydrate` feature
//! builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
