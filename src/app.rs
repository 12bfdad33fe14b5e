//! Root application module.
//!
//! Contains the main App component, the AppContext definition, the
//! product SelectionStore, and application-level setup logic following
//! Leptos conventions.

use glass_core::{ModalState, Params, ProductDetails, Router, build_router};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::sample_catalog;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// SelectionStore
// ============================================================================

/// Shared product selection behind the product-detail modal.
///
/// Any view may open or close the modal; the single [`ModalState`] signal
/// keeps "which product" and "is it visible" in step.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal, which
/// is cheap to copy (it's just a pointer to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct SelectionStore {
    state: RwSignal<ModalState>,
}

impl SelectionStore {
    /// Creates a store with the modal closed and nothing selected.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::Closed),
        }
    }

    /// Shows `product` in the modal.
    pub fn open_modal(&self, product: ProductDetails) {
        self.state.update(|s| s.open_modal(product));
    }

    /// Hides the modal and clears the selection.
    ///
    /// Does not notify subscribers when the modal is already closed.
    pub fn close_modal(&self) {
        if self.state.with_untracked(ModalState::show_modal) {
            self.state.update(ModalState::close_modal);
        }
    }

    /// Currently selected product (reactive).
    pub fn selected_product(&self) -> Option<ProductDetails> {
        self.state.with(|s| s.selected_product().cloned())
    }

    /// Whether the modal is visible (reactive).
    pub fn show_modal(&self) -> bool {
        self.state.with(ModalState::show_modal)
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Selection**: product shown in the detail modal
/// - **Router**: compiled route table, shared by the router and links
/// - **Catalog**: sample products listed by the catalog pages
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Product-detail modal state.
    pub selection: SelectionStore,

    /// Compiled route table.
    pub router: StoredValue<Router>,

    /// Products listed by catalog pages.
    pub catalog: StoredValue<Vec<ProductDetails>>,
}

impl AppContext {
    /// Creates the application context around a compiled router.
    ///
    /// - Selection: modal closed
    /// - Catalog: the bundled sample catalog
    pub fn new(router: Router) -> Self {
        Self {
            selection: SelectionStore::new(),
            router: StoredValue::new(router),
            catalog: StoredValue::new(sample_catalog()),
        }
    }

    /// Looks up a catalog product by category and id.
    pub fn find_product(&self, category: &str, product_id: u64) -> Option<ProductDetails> {
        self.catalog.with_value(|catalog| {
            catalog
                .iter()
                .find(|p| p.product_id == product_id && p.category.eq_ignore_ascii_case(category))
                .cloned()
        })
    }

    /// Catalog products in `category` (case-insensitive, like `find_product`).
    pub fn products_in(&self, category: &str) -> Vec<ProductDetails> {
        self.catalog.with_value(|catalog| {
            catalog
                .iter()
                .filter(|p| p.category.eq_ignore_ascii_case(category))
                .cloned()
                .collect()
        })
    }

    /// URL of the full detail page for `product`, built from the route table.
    pub fn product_href(&self, product: &ProductDetails) -> Option<String> {
        let params: Params = [
            ("category", product.category.clone()),
            ("product_id", product.product_id.to_string()),
        ]
        .into_iter()
        .collect();
        self.router
            .with_value(|router| router.href("product detail", &params).ok())
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Compiles the route table and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the AppRouter component
#[component]
pub fn App() -> impl IntoView {
    let routes = build_router()
        .inspect_err(|_err| {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("Invalid route table: {}", _err).into());
        })
        .map(|router| {
            provide_context(AppContext::new(router));
            view! { <AppRouter /> }.into_any()
        });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <div class=css::fallbackBody>
                        <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                        <p class=css::fallbackText>
                            "The storefront could not start. Reloading usually helps."
                        </p>
                        <details class=css::errorDetails>
                            <summary>"Error details"</summary>
                            <ul class=css::errorList>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect_view()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::reloadButton
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload page"
                        </button>
                    </div>
                </div>
            }
        >
            {routes}
        </ErrorBoundary>
    }
}
