//! # folio
//!
//! Leptos + WASM single-page personal portfolio: theme toggling, mobile
//! navigation, a filterable project gallery with a detail modal, a
//! scroll-revealed skill animation, and a client-only contact form.
//!
//! All domain behavior lives in `state/` as plain testable types; `pages/`
//! and `components/` are thin Leptos views over that state, and `util/`
//! holds the hydrate-gated browser glue.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating folio client");

    leptos::mount::hydrate_body(App);
}
