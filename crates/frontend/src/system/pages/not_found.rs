use crate::routes::routes::HOME_PATH;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href=HOME_PATH>"Back to menu"</A>
        </div>
    }
}
