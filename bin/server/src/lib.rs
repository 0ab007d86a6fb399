//! ReturnoScope web server and UI.
//!
//! This crate provides the Leptos-based web interface for the ReturnoScope
//! financial analytics demo: the login screen and the two role-specific
//! landing views it redirects to.

#![allow(non_snake_case)]

pub mod app;
pub mod notify;
pub mod pages;
pub mod storage;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
