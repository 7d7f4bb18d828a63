//! # client
//!
//! Leptos + WASM frontend for the college portal login flow.
//!
//! This crate contains the login page (role selector, credential form,
//! session bootstrap guard), the role home pages, the browser storage
//! backend for sessions, and the HTTP login API. The login state machine
//! itself lives in the shared `portal` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
