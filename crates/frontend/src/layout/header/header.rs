use crate::layout::header::mega_menu::MegaMenuBar;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let is_admin = Signal::derive(move || auth_state.get().is_admin());
    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            do_logout(set_auth_state).await;
            navigate("/", Default::default());
        });
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/MenuDashboard" attr:class="header__title">"Smart Enterprise"</A>
                <MegaMenuBar is_admin=is_admin />
            </div>
            <div class="header__actions">
                <span class="header__user">{user_name}</span>
                <button class="button button--ghost" aria-label="Logout" on:click=on_logout>
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
