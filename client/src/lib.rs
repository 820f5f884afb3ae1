//! # client
//!
//! Leptos + WASM frontend for the Pantry household inventory app.
//!
//! This crate holds the two app-wide stores (session and UI/toasts), the
//! chrome components that render them, and the placeholder route pages.
//! Stores are built once in [`app::App`] and handed to components as props.

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
