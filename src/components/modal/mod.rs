//! Product-detail modal.
//!
//! Rendered once by the router and shown whenever the shared
//! [`SelectionStore`](crate::app::SelectionStore) holds a product. Closes on
//! the close button, a backdrop click or Escape.

use glass_core::ProductDetails;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::RouterLink;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

/// Global product-detail modal.
#[component]
pub fn ProductModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.selection;

    // The modal lives as long as the app, so the listener is never removed.
    let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            selection.close_modal();
        }
    });

    view! {
        <Show when=move || selection.show_modal()>
            <div class=css::backdrop on:click=move |_| selection.close_modal()>
                <div
                    class=css::dialog
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <button
                        class=css::closeButton
                        title="Close"
                        on:click=move |_| selection.close_modal()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                    {move || {
                        selection
                            .selected_product()
                            .map(|product| view! { <ProductSummary product=product /> })
                    }}
                </div>
            </div>
        </Show>
    }
}

/// Body of the modal for one product.
#[component]
fn ProductSummary(product: ProductDetails) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.selection;

    let details_href = ctx.product_href(&product);

    let stock = if product.in_stock() {
        view! { <span class=css::stock>{format!("{} in stock", product.product_stock)}</span> }
            .into_any()
    } else {
        view! { <span class=css::soldOut>"Out of stock"</span> }.into_any()
    };

    view! {
        {product.product_image.clone().map(|src| {
            let alt = product.product_name.clone();
            view! { <img class=css::image src=src alt=alt /> }
        })}
        <h2 class=css::name>{product.product_name.clone()}</h2>
        <p class=css::meta>{format!("{} · {}", product.category, product.product_type)}</p>
        <p>
            <span class=css::price>{product.price_label()}</span>
            " · "
            {stock}
        </p>
        {product.product_description.clone().map(|text| view! { <p class=css::description>{text}</p> })}
        <div class=css::actions>
            {details_href.map(|href| view! {
                <span on:click=move |_| selection.close_modal()>
                    <RouterLink to=href class=css::detailsLink>
                        <Icon icon=ic::EXTERNAL_LINK />
                        "View full details"
                    </RouterLink>
                </span>
            })}
        </div>
    }
}
