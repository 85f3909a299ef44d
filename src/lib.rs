//! Client-side behaviors for the marketing site.
//!
//! This crate is compiled to WebAssembly and attached to the server-rendered
//! pages. It owns every interactive effect on the page: the hero carousel,
//! the puzzle-piece image reveal, scroll fade-ins, smooth anchor scrolling,
//! the hero parallax, the typing banner, and the contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Slide index arithmetic and autoplay hold state |
//! | [`puzzle`] | Grid selection and tile layout for the puzzle reveal |
//! | [`reveal`] | `data-delay` parsing for scroll fade-ins |
//! | [`scroll`] | Anchor scroll destination under the sticky header |
//! | [`parallax`] | Hero parallax offset |
//! | [`typing`] | Typing banner state machine |
//! | [`contact`] | Contact form validation and webhook payload |
//! | [`config`] | Page-embedded configuration |
//! | [`consts`] | Shared timings, thresholds and queries |
//! | `web` | Browser shells (`browser` feature) |
//!
//! Everything outside `web` is plain Rust and tested natively.

pub mod carousel;
pub mod config;
pub mod consts;
pub mod contact;
pub mod parallax;
pub mod puzzle;
pub mod reveal;
pub mod scroll;
pub mod typing;

#[cfg(feature = "browser")]
pub mod web;

/// WASM entry point, run when the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = web::boot::boot() {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!("site boot failed: {err}")));
    }
}
