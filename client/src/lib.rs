//! # client
//!
//! Leptos + WASM frontend for the collectibles gallery.
//!
//! This crate contains the pages, components, and wallet state of the UI.
//! Wallet access goes through the `wallet::provider::WalletProvider` trait so
//! the browser bridge can be swapped for a fake in tests. Domain types and
//! rules (metadata, ownership, physicals) come from the `collectibles` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod wallet;

/// WASM entry point: hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
