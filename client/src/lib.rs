//! # client
//!
//! Leptos + WASM frontend for the todo app.
//!
//! This crate contains the session core (token store, cookie mirror,
//! authenticated request client, session controller, route guard), the todo
//! and chat resource clients, and the pages that use them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
