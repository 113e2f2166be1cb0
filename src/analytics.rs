//! Best-effort analytics events.
//!
//! Events are pushed onto a Matomo-style global `_paq` array when the host
//! page provides one. A missing or malformed collector is tolerated silently;
//! nothing here can fail a flow transition.

use wasm_bindgen::{JsCast, JsValue};

/// Emit a `(category, action, label?)` event. No-op without a collector.
pub fn track_event(category: &str, action: &str, label: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(paq) = js_sys::Reflect::get(&window, &JsValue::from_str("_paq")) else {
        return;
    };
    if paq.is_undefined() || paq.is_null() {
        return;
    }

    let event = js_sys::Array::new();
    event.push(&JsValue::from_str("trackEvent"));
    event.push(&JsValue::from_str(category));
    event.push(&JsValue::from_str(action));
    if let Some(label) = label {
        event.push(&JsValue::from_str(label));
    }

    // _paq.push(event) — tolerate a collector without a callable push.
    if let Ok(push) = js_sys::Reflect::get(&paq, &JsValue::from_str("push")) {
        if let Some(push) = push.dyn_ref::<js_sys::Function>() {
            let _ = push.call1(&paq, &event);
        }
    }
}

/// Goal completions are tracked as a dedicated event category.
pub fn track_goal(goal: &str, platform: &str) {
    track_event("Goal Completion", goal, Some(platform));
}
