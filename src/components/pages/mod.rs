//! Routed page components.
//!
//! Each [`View`] of the route table maps to one component here. Layout
//! views (customer and admin areas) receive the rendered child page as
//! their `outlet`.
//!
//! - [`public`] - welcome, customer auth, not found
//! - [`customer`] - customer area and product detail
//! - [`admin`] - admin login, admin area and product editor

mod admin;
mod customer;
mod public;

use glass_core::{ResolvedRoute, View};
use leptos::prelude::*;

pub use admin::{
    AddUpdateProduct, AdminDashboard, AdminFeedbackRating, AdminLogin, MainDashboard,
    OrderManagement, ProductManagement, RecentActivity,
};
pub use customer::{
    CategoryPage, CustomerDashboard, CustomerFeedbackRating, Home, ProductDetail, TrackOrder,
    ViewUserProfile,
};
pub use public::{CustomerLogin, CustomerRegister, NotFound, WelcomePage};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Render one view of a matched route.
///
/// `outlet` is the already-rendered child view, if any.
pub fn render(view: View, route: &ResolvedRoute, outlet: Option<AnyView>) -> AnyView {
    match view {
        View::NotFound => view! { <NotFound /> }.into_any(),
        View::WelcomePage => view! { <WelcomePage /> }.into_any(),
        View::CustomerLogin => view! { <CustomerLogin /> }.into_any(),
        View::CustomerRegister => view! { <CustomerRegister /> }.into_any(),
        View::CustomerDashboard => view! { <CustomerDashboard outlet=outlet /> }.into_any(),
        View::Home => view! { <Home /> }.into_any(),
        View::Doors | View::Windows | View::Others => {
            let category = view.category().unwrap_or_default();
            view! { <CategoryPage title=view.title() category=category /> }.into_any()
        }
        View::TrackOrder => view! { <TrackOrder /> }.into_any(),
        View::ViewUserProfile => view! { <ViewUserProfile /> }.into_any(),
        View::CustomerFeedbackRating => view! { <CustomerFeedbackRating /> }.into_any(),
        View::ProductDetail => view! { <ProductDetail /> }.into_any(),
        View::AdminLogin => view! { <AdminLogin /> }.into_any(),
        View::AdminDashboard => view! { <AdminDashboard outlet=outlet /> }.into_any(),
        View::MainDashboard => view! { <MainDashboard /> }.into_any(),
        View::RecentActivity => view! { <RecentActivity /> }.into_any(),
        View::ProductManagement => view! { <ProductManagement /> }.into_any(),
        View::OrderManagement => view! { <OrderManagement /> }.into_any(),
        View::AdminFeedbackRating => view! { <AdminFeedbackRating /> }.into_any(),
        View::AddUpdateProduct => {
            let id = route
                .view_props()
                .and_then(|props| props.get("id"))
                .map(String::from);
            view! { <AddUpdateProduct id=id /> }.into_any()
        }
    }
}

/// Title and optional subtitle at the top of a page.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <h1 class=css::title>{title}</h1>
        {subtitle.map(|text| view! { <p class=css::subtitle>{text}</p> })}
    }
}
