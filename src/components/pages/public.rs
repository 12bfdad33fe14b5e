//! Pages outside the customer and admin areas.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::PageHeader;
use crate::components::icons as ic;
use crate::components::{RouteContext, RouterLink};
use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <section class=css::page>
            <div class=css::hero>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::subtitle>{APP_TAGLINE}</p>
                <div class=css::heroActions>
                    <RouterLink to="/login" class=css::primaryButton>
                        <Icon icon=ic::USER />
                        "Log in"
                    </RouterLink>
                    <RouterLink to="/signup" class=css::secondaryButton>
                        "Create an account"
                    </RouterLink>
                </div>
            </div>
        </section>
    }
}

/// Customer login form.
///
/// Credentials are checked by the backend; this page only collects them.
#[component]
pub fn CustomerLogin() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Log in" subtitle="Welcome back." />
            <form class=css::form on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
                <label class=css::field>
                    "Email"
                    <input type="email" name="email" autocomplete="email" required=true />
                </label>
                <label class=css::field>
                    "Password"
                    <input type="password" name="password" autocomplete="current-password" required=true />
                </label>
                <button class=css::primaryButton type="submit">"Log in"</button>
            </form>
            <p class=css::muted>
                "No account yet? "
                <RouterLink to="/signup">"Sign up"</RouterLink>
            </p>
        </section>
    }
}

/// Customer registration form.
#[component]
pub fn CustomerRegister() -> impl IntoView {
    view! {
        <section class=css::page>
            <PageHeader title="Sign up" subtitle="Create a customer account to place and track orders." />
            <form class=css::form on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
                <label class=css::field>
                    "Full name"
                    <input type="text" name="name" autocomplete="name" required=true />
                </label>
                <label class=css::field>
                    "Email"
                    <input type="email" name="email" autocomplete="email" required=true />
                </label>
                <label class=css::field>
                    "Password"
                    <input type="password" name="password" autocomplete="new-password" required=true />
                </label>
                <button class=css::primaryButton type="submit">"Create account"</button>
            </form>
            <p class=css::muted>
                "Already registered? "
                <RouterLink to="/login">"Log in"</RouterLink>
            </p>
        </section>
    }
}

/// Catch-all page for unmatched paths.
#[component]
pub fn NotFound() -> impl IntoView {
    let requested = use_context::<RouteContext>()
        .and_then(|route_ctx| route_ctx.param("pathMatch"))
        .filter(|path| !path.is_empty());

    view! {
        <section class=css::page>
            <div class=css::hero>
                <PageHeader title="Page not found" />
                {requested.map(|path| view! {
                    <p class=css::muted>{format!("Nothing lives at /{}.", path)}</p>
                })}
                <div class=css::heroActions>
                    <RouterLink to="/" class=css::primaryButton>
                        <Icon icon=ic::HOME />
                        "Back to home"
                    </RouterLink>
                </div>
            </div>
        </section>
    }
}
