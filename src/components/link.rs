//! History-aware anchor component.

use leptos::{ev, prelude::*};

use super::RouteContext;

/// Anchor that navigates through the router instead of reloading the page.
///
/// Modified clicks (ctrl/meta/shift/alt, middle button) fall through to the
/// browser so "open in new tab" keeps working. The link is marked with
/// `aria-current="page"` while its target (or a child of it) is active.
#[component]
pub fn RouterLink(
    /// Target path, optionally with a query string.
    #[prop(into)]
    to: String,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let href = to.clone();
    let active_target = to.clone();
    let is_active = Signal::derive(move || route_ctx.is_active(&active_target));

    let on_click = move |ev: ev::MouseEvent| {
        if ev.default_prevented()
            || ev.button() != 0
            || ev.ctrl_key()
            || ev.meta_key()
            || ev.shift_key()
            || ev.alt_key()
        {
            return;
        }
        ev.prevent_default();
        route_ctx.push(&to);
    };

    view! {
        <a
            href=href
            class=class
            aria-current=move || is_active.get().then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}
