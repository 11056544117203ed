//! # client
//!
//! Leptos + WASM frontend for the CulinaryTech account pages: registration
//! form, profile page, and the browser-backed session context.
//!
//! Browser-only behavior (`localStorage`, `fetch`, timers, navigation) is gated
//! behind the `csr` feature; without it the same code compiles natively with
//! no-op stand-ins so components and state can be unit tested.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("mounting CulinaryTech client");
    leptos::mount::mount_to_body(app::App);
}
