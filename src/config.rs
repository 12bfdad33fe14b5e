//! Application configuration.
//!
//! Centralizes the constants used by the shell. The sample catalog is
//! loaded at compile time using `include_str!`. Routing and access-key
//! settings live in [`glass_core::config`].

use glass_core::ProductDetails;

// =============================================================================
// Application Metadata
// =============================================================================

/// Storefront name shown in headers and the document title.
pub const APP_NAME: &str = "Glass Storefront";

/// Tagline displayed on the welcome page.
pub const APP_TAGLINE: &str = "Custom glass doors, windows and fittings";

/// Element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Catalog
// =============================================================================

/// Sample products listed by the catalog pages.
pub const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Parse the bundled sample catalog.
///
/// Returns an empty catalog (and logs a warning) if the asset is malformed.
pub fn sample_catalog() -> Vec<ProductDetails> {
    serde_json::from_str(CATALOG_JSON).unwrap_or_else(|_err| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!("Invalid catalog asset: {}", _err).into());
        Vec::new()
    })
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
