//! # client
//!
//! Leptos + WASM front-end for the link page application: account pages,
//! the user dashboard and analytics, the ban-appeal flow, and the admin
//! moderation console.
//!
//! Session lifecycle lives in the `session` crate; this crate supplies the
//! browser implementations of its storage and transport seams and renders
//! everything on top of it.

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
