//! # atelier-admin
//!
//! Leptos + WASM admin console for a design studio's portfolio catalog.
//! The crate is a single-page client over a token-authenticated REST
//! backend: a login screen, a session-expiry guard on every protected
//! navigation, and CRUD screens for the project catalog.
//!
//! The backend (token issuance, storage, image hosting) is an external
//! collaborator; this crate only consumes its HTTP surface.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
