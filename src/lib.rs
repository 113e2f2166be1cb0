//! Holding-page core crate.
//!
//! A "coming soon" page that makes reaching the social links deliberately
//! hard: buttons dodge the cursor, confirmations are phrased in double and
//! triple negatives, and a joke CAPTCHA guards the final step. Everything
//! stateful (flow, CAPTCHA, gestures, stats) is plain Rust testable off the
//! browser; `page` is the only module that touches the DOM.

use wasm_bindgen::prelude::*;

pub mod analytics;
pub mod captcha;
pub mod easter_egg;
pub mod flow;
pub mod gesture;
mod page;
pub mod phrases;
pub mod stats;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Render the page into `#app` and wire all interaction handlers.
#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    page::start_page()
}
