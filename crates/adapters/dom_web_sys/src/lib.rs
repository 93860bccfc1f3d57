//! # wordclock-adapter-dom
//!
//! Browser entry point for the settings page served by the word clock.
//!
//! Binds the colour, timezone, brightness and Wi-Fi buttons to the device's
//! JSON endpoints and shows each outcome as a toast. All transformation logic
//! comes from `wordclock-domain`; this crate only reads the DOM and sends.

use wasm_bindgen::prelude::*;

pub mod api;
mod bind;
mod toast;

/// Bind the panel once the module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let bound = bind::bind_panel(&document);
    web_sys::console::debug_1(&format!("wordclock panel: {bound} button(s) bound").into());
}
