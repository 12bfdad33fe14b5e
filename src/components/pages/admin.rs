//! Admin area: login, dashboard layout, management pages and the product editor.

use icondata::Icon as IconData;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::PageHeader;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::{RouteContext, RouterLink};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Sidebar entries of the admin area.
const ADMIN_NAV: &[(&str, &str, IconData)] = &[
    ("Dashboard", "/admin/dashboard", ic::HOME),
    ("Recent Activity", "/admin/recent-activities", ic::LIST),
    ("Products", "/admin/product-management", ic::GRID),
    ("Orders", "/admin/order-management", ic::LIST),
    ("Feedback", "/admin/view-feedback", ic::EDIT),
    ("Add Product", "/products/add", ic::PLUS),
];

/// Admin login form.
///
/// Only reachable with the shared access key; submitting enters the admin area.
#[component]
pub fn AdminLogin() -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        route_ctx.push("/admin");
    };

    view! {
        <section class=css::page>
            <PageHeader title="Admin Login" subtitle="Staff access only." />
            <form class=css::form on:submit=on_submit>
                <label class=css::field>
                    "Username"
                    <input type="text" name="username" autocomplete="username" required=true />
                </label>
                <label class=css::field>
                    "Password"
                    <input type="password" name="password" autocomplete="current-password" required=true />
                </label>
                <button class=css::primaryButton type="submit">
                    <Icon icon=ic::LOCK />
                    "Log in"
                </button>
            </form>
        </section>
    }
}

/// Admin area layout with sidebar navigation.
#[component]
pub fn AdminDashboard(outlet: Option<AnyView>) -> impl IntoView {
    view! {
        <div class=css::layout>
            <nav class=css::sidebar>
                <h2 class=css::sidebarTitle>"Admin"</h2>
                {ADMIN_NAV
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

/// Catalog overview.
#[component]
pub fn MainDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (total, out_of_stock) = ctx.catalog.with_value(|catalog| {
        (
            catalog.len(),
            catalog.iter().filter(|p| !p.in_stock()).count(),
        )
    });

    let stats = [
        ("Products", total),
        ("Doors", ctx.products_in("doors").len()),
        ("Windows", ctx.products_in("windows").len()),
        ("Out of stock", out_of_stock),
    ];

    view! {
        <section class=css::page>
            <PageHeader title="Dashboard" />
            <div class=css::stats>
                {stats
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class=css::card>
                            <span class=css::statValue>{value}</span>
                            <span class=css::cardMeta>{label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn RecentActivity() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Recent Activity" />
            <p class=css::muted>"No activity recorded yet."</p>
        </section>
    }
}

/// Catalog table with edit links into the product editor.
#[component]
pub fn ProductManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let products = ctx.catalog.get_value();

    view! {
        <section class=css::page>
            <PageHeader title="Product Management" />
            <RouterLink to="/products/add" class=css::primaryButton>
                <Icon icon=ic::PLUS />
                "Add product"
            </RouterLink>
            <table class=css::table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {products
                        .into_iter()
                        .map(|product| {
                            let edit = format!("/products/update/{}", product.product_id);
                            view! {
                                <tr>
                                    <td>{product.product_id}</td>
                                    <td>{product.product_name.clone()}</td>
                                    <td>{product.category.clone()}</td>
                                    <td>{product.price_label()}</td>
                                    <td>{product.product_stock}</td>
                                    <td>
                                        <RouterLink to=edit>
                                            <Icon icon=ic::EDIT />
                                            "Edit"
                                        </RouterLink>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
pub fn OrderManagement() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Order Management" />
            <p class=css::muted>"No orders to process."</p>
        </section>
    }
}

#[component]
pub fn AdminFeedbackRating() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Customer Feedback" />
            <p class=css::muted>"No feedback submitted yet."</p>
        </section>
    }
}

/// Product editor.
///
/// Without an `id` it adds a new product; with one it edits the matching
/// catalog entry, prefilled when the product is known.
#[component]
pub fn AddUpdateProduct(id: Option<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let existing = id.as_deref().and_then(|id| id.parse::<u64>().ok()).and_then(|id| {
        ctx.catalog
            .with_value(|catalog| catalog.iter().find(|p| p.product_id == id).cloned())
    });

    let heading = if id.is_some() { "Update Product" } else { "Add Product" };
    let subtitle = match (&id, &existing) {
        (Some(_), Some(product)) => format!("Editing #{}", product.product_id),
        (Some(id), None) => format!("Product #{} is not in the catalog.", id),
        (None, _) => "Fill in the details of the new product.".to_string(),
    };

    let name = existing
        .as_ref()
        .map(|p| p.product_name.clone())
        .unwrap_or_default();
    let category = existing
        .as_ref()
        .map(|p| p.category.clone())
        .unwrap_or_default();
    let product_type = existing
        .as_ref()
        .map(|p| p.product_type.clone())
        .unwrap_or_default();
    let price = existing
        .as_ref()
        .map(|p| format!("{:.2}", p.product_price))
        .unwrap_or_default();
    let stock = existing
        .as_ref()
        .map(|p| p.product_stock.to_string())
        .unwrap_or_default();

    view! {
        <section class=css::page>
            <PageHeader title=heading subtitle=subtitle />
            <form class=css::form on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
                <label class=css::field>
                    "Name"
                    <input type="text" name="product_name" value=name required=true />
                </label>
                <label class=css::field>
                    "Category"
                    <select name="category">
                        {["doors", "windows", "others"]
                            .into_iter()
                            .map(|option| {
                                let selected = category == option;
                                view! { <option value=option selected=selected>{option}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class=css::field>
                    "Type"
                    <input type="text" name="product_type" value=product_type />
                </label>
                <label class=css::field>
                    "Price"
                    <input type="number" name="product_price" min="0" step="0.01" value=price required=true />
                </label>
                <label class=css::field>
                    "Stock"
                    <input type="number" name="product_stock" min="0" value=stock required=true />
                </label>
                <button class=css::primaryButton type="submit">{heading}</button>
            </form>
            <RouterLink to="/admin/product-management">"Back to products"</RouterLink>
        </section>
    }
}
