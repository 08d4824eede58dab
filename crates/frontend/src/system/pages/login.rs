use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::routes::routes::HOME_PATH;
use crate::system::auth::api;
use crate::system::auth::context::{complete_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Enter username and password".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    complete_login(set_auth_state, response);
                    navigate(HOME_PATH, Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    let text = if e.resolution.is_empty() {
                        e.message
                    } else {
                        format!("{}. {}", e.message, e.resolution)
                    };
                    set_error_message.set(Some(text));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <Show
            when=move || !auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path=HOME_PATH /> }
        >
            <div class="login-container">
                <div class="login-box">
                    <h1>"Smart Enterprise"</h1>
                    <h2>"Sign in"</h2>

                    {move || error_message.get().map(|msg| view! {
                        <div class="alert alert--error">{msg}</div>
                    })}

                    <form on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                type="text"
                                id="username"
                                autocomplete="username"
                                prop:value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=Signal::derive(move || is_loading.get())
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </Button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
