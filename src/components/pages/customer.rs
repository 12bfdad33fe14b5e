//! Customer area: dashboard layout, catalog pages and product detail.

use glass_core::ProductDetails;
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::PageHeader;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::{RouteContext, RouterLink};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Sidebar entries of the customer area.
const CUSTOMER_NAV: &[(&str, &str, IconData)] = &[
    ("Home", "/dashboard/home", ic::HOME),
    ("Doors", "/dashboard/doors", ic::GRID),
    ("Windows", "/dashboard/windows", ic::GRID),
    ("Others", "/dashboard/others", ic::GRID),
    ("Track Order", "/dashboard/track-order", ic::LOCATION),
    ("My Profile", "/dashboard/user-profile", ic::USER),
    ("Feedback", "/dashboard/feedback", ic::EDIT),
];

/// Customer area layout with sidebar navigation.
#[component]
pub fn CustomerDashboard(outlet: Option<AnyView>) -> impl IntoView {
    view! {
        <div class=css::layout>
            <nav class=css::sidebar>
                <h2 class=css::sidebarTitle>"My Dashboard"</h2>
                {CUSTOMER_NAV
                    .iter()
                    .map(|(label, path, icon)| view! {
                        <RouterLink to=*path class=css::navLink>
                            <Icon icon=*icon />
                            {*label}
                        </RouterLink>
                    })
                    .collect_view()}
            </nav>
            <main class=css::content>{outlet}</main>
        </div>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Home" subtitle="Browse our glass products by category." />
            <div class=css::grid>
                <CategoryTile title="Doors" path="/dashboard/doors" blurb="Swing, sliding and shower doors." />
                <CategoryTile title="Windows" path="/dashboard/windows" blurb="Awning, casement and fixed windows." />
                <CategoryTile title="Others" path="/dashboard/others" blurb="Mirrors, table tops and custom cuts." />
            </div>
        </section>
    }
}

#[component]
fn CategoryTile(title: &'static str, path: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class=css::card>
            <h3 class=css::cardTitle>{title}</h3>
            <p class=css::cardMeta>{blurb}</p>
            <RouterLink to=path class=css::secondaryButton>"Browse"</RouterLink>
        </div>
    }
}

/// Product listing for one category.
#[component]
pub fn CategoryPage(title: &'static str, category: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let products = ctx.products_in(category);

    let listing = if products.is_empty() {
        view! { <p class=css::muted>"No products in this category yet."</p> }.into_any()
    } else {
        view! {
            <div class=css::grid>
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class=css::page>
            <PageHeader title=title />
            {listing}
        </section>
    }
}

/// Catalog card with a quick-view button that opens the product modal.
#[component]
fn ProductCard(product: ProductDetails) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let details_href = ctx.product_href(&product);
    let name = product.product_name.clone();
    let meta = format!("{} · {}", product.product_type, product.price_label());

    let on_quick_view = move |_| ctx.selection.open_modal(product.clone());

    view! {
        <div class=css::card>
            <h3 class=css::cardTitle>{name}</h3>
            <p class=css::cardMeta>{meta}</p>
            <button class=css::primaryButton on:click=on_quick_view>"Quick view"</button>
            {details_href.map(|href| view! {
                <RouterLink to=href class=css::secondaryButton>"Details"</RouterLink>
            })}
        </div>
    }
}

/// Full product page at `/product/:category/:product_id`.
#[component]
pub fn ProductDetail() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let category = route_ctx.param("category").unwrap_or_default();
    let product = route_ctx
        .param("product_id")
        .and_then(|id| id.parse::<u64>().ok())
        .and_then(|id| ctx.find_product(&category, id));

    let Some(product) = product else {
        return view! {
            <section class=css::page>
                <PageHeader title="Product Details" />
                <p class=css::muted>"This product is not in the catalog."</p>
                <RouterLink to="/dashboard/home">"Back to home"</RouterLink>
            </section>
        }
        .into_any();
    };

    let stock = if product.in_stock() {
        format!("{} in stock", product.product_stock)
    } else {
        "Out of stock".to_string()
    };
    let summary = format!("{} · {}", product.category, product.product_type);
    let description = product.product_description.clone();
    let name = product.product_name.clone();
    let price = product.price_label();

    view! {
        <section class=css::page>
            <h1 class=css::title>{name}</h1>
            <p class=css::subtitle>{summary}</p>
            <p>{price}" · "{stock}</p>
            {description.map(|text| view! { <p>{text}</p> })}
            <button
                class=css::primaryButton
                on:click=move |_| ctx.selection.open_modal(product.clone())
            >
                "Quick view"
            </button>
        </section>
    }
    .into_any()
}

#[component]
pub fn TrackOrder() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Track Order" subtitle="Follow your orders from fabrication to installation." />
            <p class=css::muted>"You have no active orders."</p>
        </section>
    }
}

#[component]
pub fn ViewUserProfile() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="My Profile" subtitle="Contact details and delivery addresses." />
            <p class=css::muted>"Log in to see your profile."</p>
        </section>
    }
}

#[component]
pub fn CustomerFeedbackRating() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Feedback" subtitle="Rate a completed order." />
            <p class=css::muted>"Orders become available for rating once they are installed."</p>
        </section>
    }
}
