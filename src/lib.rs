//! # whiteboard-client
//!
//! Leptos + WASM front end for the whiteboard service's canvas dashboard.
//!
//! The dashboard loads the signed-in user's profile and the canvases they can
//! see from the REST backend, and lets them create, open, share and delete
//! canvases. Drawing and live collaboration happen elsewhere.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating whiteboard client");
    leptos::mount::hydrate_body(app::App);
}
