//! # portfolio-client
//!
//! Leptos + WASM frontend for the portfolio site: the landing page
//! (hero, projects, about, contact) and the responsive viewer route.
//!
//! The crate builds twice: with `ssr` for the server's renderer and with
//! `hydrate` for the browser bundle that takes over the rendered page.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
