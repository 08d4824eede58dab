use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

fn restoring_view() -> AnyView {
    view! { <div class="page__loading">"Checking session..."</div> }.into_any()
}

fn login_redirect() -> AnyView {
    view! { <Redirect path="/" /> }.into_any()
}

/// Renders children for signed-in users; others go back to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    move || {
        let state = auth_state.get();
        if state.restoring {
            restoring_view()
        } else if !state.is_authenticated() {
            login_redirect()
        } else {
            children()
        }
    }
}

/// Like [`RequireAuth`], additionally requiring the `ADMIN` role.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    move || {
        let state = auth_state.get();
        if state.restoring {
            restoring_view()
        } else if !state.is_authenticated() {
            login_redirect()
        } else if !state.is_admin() {
            view! {
                <div class="alert alert--error">"Access denied. Admin privileges required."</div>
            }
            .into_any()
        } else {
            children()
        }
    }
}
