//! Componix UI - Animated Component Showcase
//!
//! A marketing and showcase site for a library of animated Tailwind UI
//! components, built with Leptos and WebAssembly. Page content reveals with
//! staggered, scroll-linked animations driven by a framework-free sequencer.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
