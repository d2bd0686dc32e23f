//! # newsdesk-client
//!
//! Leptos + WASM frontend for the newsdesk content-management app.
//!
//! This crate contains pages, components, client state, configuration and the
//! REST helpers that talk to the upstream identity and news APIs. Everything
//! outside `hydrate`-gated blocks compiles natively so the session, listing,
//! and draft logic can be unit tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
