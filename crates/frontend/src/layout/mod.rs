pub mod header;
pub mod menu;

use leptos::prelude::*;

/// Page chrome for signed-in users: header with menu, then the page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
