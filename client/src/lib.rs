//! # client
//!
//! Leptos + WASM frontend for the memorial site "Боль и память сквозь года".
//!
//! This crate contains the page, its components, per-controller state, the
//! memory collection fetch, and the pure formatting / key-dispatch helpers.
//! The `ssr` feature is used by `server` to pre-render the shell; `hydrate`
//! builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).unwrap_or(());
    leptos::mount::hydrate_body(app::App);
}
