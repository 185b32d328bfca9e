//! # squadboard
//!
//! Leptos + WASM client shell for the team-management dashboard: the route
//! table with its authentication guard, and the session store that holds the
//! signed-in user and bearer token.
//!
//! `routes` and `state` carry the logic and are plain Rust, testable natively.
//! `app`, `pages` and `components` wire them into Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;

pub use app::{App, shell};

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(App);
}
