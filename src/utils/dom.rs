//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Failures are ignored:
//! without a window there is nothing to navigate.

use wasm_bindgen::JsValue;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL path and query (e.g. `/admin-login?key=...`).
///
/// Falls back to `/` outside a browser.
pub fn current_url() -> String {
    let Some(location) = window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

/// Navigate to `url` without reloading (adds to browser history).
pub fn push_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Replace the current URL without adding to browser history.
///
/// Used for redirects that shouldn't appear in back button history.
pub fn replace_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
