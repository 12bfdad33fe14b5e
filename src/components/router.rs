//! Application router component.
//!
//! Binds the compiled [`glass_core::Router`] to browser history.
//!
//! # Architecture
//!
//! - **URL is the source of truth**: the current route is derived from
//!   `pathname + search`
//! - **Redirects rewrite the URL**: default-child and guard redirects use
//!   `replaceState` so they don't pile up in back button history
//! - **popstate events**: browser back/forward buttons re-run navigation
//! - **Modal is global**: `ProductModal` stays mounted across route changes

use glass_core::{Location, Navigation, ResolvedRoute, Router};
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::modal::ProductModal;
use crate::components::pages::{self, NotFound};
use crate::config::APP_NAME;
use crate::utils::dom;

// ============================================================================
// Route Context
// ============================================================================

/// How a settled navigation updates the address bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HistoryMode {
    /// Add a history entry.
    Push,
    /// The browser already shows the URL; only rewrite it on redirect.
    Sync,
}

/// Context for reading the current route and navigating from any component.
#[derive(Clone, Copy)]
pub struct RouteContext {
    current: RwSignal<Option<ResolvedRoute>>,
    router: StoredValue<Router>,
}

impl RouteContext {
    fn new(router: StoredValue<Router>) -> Self {
        Self {
            current: RwSignal::new(None),
            router,
        }
    }

    /// Current route (reactive). `None` only if the first navigation failed.
    pub fn route(&self) -> Option<ResolvedRoute> {
        self.current.get()
    }

    /// Read a param of the current route (reactive).
    pub fn param(&self, name: &str) -> Option<String> {
        self.current
            .with(|r| r.as_ref().and_then(|r| r.param(name)).map(String::from))
    }

    /// Whether the current path is `path` or below it (reactive).
    pub fn is_active(&self, path: &str) -> bool {
        self.current
            .with(|r| r.as_ref().is_some_and(|r| path_is_active(&r.path, path)))
    }

    /// Navigate to `to`, adding a history entry.
    pub fn push(&self, to: &str) {
        self.go(Location::parse(to), HistoryMode::Push);
    }

    /// Re-run navigation for whatever URL the browser currently shows.
    fn sync_from_browser(&self) {
        self.go(Location::parse(&dom::current_url()), HistoryMode::Sync);
    }

    fn go(&self, to: Location, mode: HistoryMode) {
        let result = self.current.with_untracked(|from| {
            self.router
                .with_value(|router| router.navigate(&to, from.as_ref()))
        });

        match result {
            Ok(navigation) => {
                write_history(&navigation, mode);
                self.current.set(Some(navigation.route));
            }
            Err(_err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&format!("Navigation to {} failed: {}", to, _err).into());
            }
        }
    }
}

/// Whether `current` is `target` or lies below it.
///
/// The root is only active on an exact match, since every path lies below it.
fn path_is_active(current: &str, target: &str) -> bool {
    let current = current.trim_end_matches('/');
    let target = target.split('?').next().unwrap_or_default().trim_end_matches('/');
    if target.is_empty() {
        return current.is_empty();
    }
    current == target || current.starts_with(&format!("{}/", target))
}

/// Reflect a settled navigation in the address bar.
fn write_history(navigation: &Navigation, mode: HistoryMode) {
    let url = navigation.route.location().to_string();

    if let Some(_requested) = &navigation.redirected_from {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("Redirected {} -> {}", _requested, url).into());
    }

    match mode {
        HistoryMode::Push => dom::push_url(&url),
        HistoryMode::Sync if navigation.is_redirected() => dom::replace_url(&url),
        HistoryMode::Sync => {}
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Resolves the browser URL against the route table and renders the
/// matched view chain: a layout (customer or admin area) wrapping its
/// child page, or a single top-level page.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = RouteContext::new(ctx.router);
    provide_context(route_ctx);

    // Initial navigation for the URL the page was loaded with
    route_ctx.sync_from_browser();

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route_ctx.sync_from_browser();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Keep the document title in step with the page
    Effect::new(move || {
        if let Some(view) = route_ctx.current.with(|r| r.as_ref().map(|r| r.view)) {
            dom::set_document_title(&format!("{} | {}", view.title(), APP_NAME));
        }
    });

    view! {
        {move || match route_ctx.current.get() {
            Some(route) => render_route(&route),
            None => view! { <NotFound /> }.into_any(),
        }}

        // Modal is shown on top of any page while a product is selected
        <ProductModal />
    }
}

/// Render the matched views innermost first, nesting each into its layout.
fn render_route(route: &ResolvedRoute) -> AnyView {
    route
        .matched
        .iter()
        .rev()
        .fold(None, |outlet, view| Some(pages::render(*view, route, outlet)))
        .unwrap_or_else(|| view! { <NotFound /> }.into_any())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_active_prefix() {
        assert!(path_is_active("/dashboard/doors", "/dashboard/doors"));
        assert!(path_is_active("/dashboard/doors/", "/dashboard/doors"));
        assert!(path_is_active("/dashboard/doors", "/dashboard"));
        assert!(path_is_active("/admin/dashboard", "/admin/dashboard?tab=1"));
        assert!(!path_is_active("/dashboard/doors", "/dashboard/windows"));
        assert!(!path_is_active("/dashboardx", "/dashboard"));
    }

    #[test]
    fn test_path_is_active_root_only_matches_exactly() {
        assert!(path_is_active("/", "/"));
        assert!(!path_is_active("/dashboard/home", "/"));
        assert!(!path_is_active("/admin", "/"));
    }
}
