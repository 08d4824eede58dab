use crate::layout::menu::{menu_sections, MenuSection};
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn MegaMenuCategory(section: MenuSection, is_admin: bool) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let navigate = use_navigate();

    view! {
        <div
            class="mega-menu-category"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="mega-menu-btn"
                class:mega-menu-btn-active=move || is_open.get()
            >
                {icons::icon(section.icon)}
                <span>{section.title}</span>
            </button>

            <div
                class="mega-menu-panel"
                class:mega-menu-panel-open=move || is_open.get()
            >
                <div class="mega-menu-content">
                    {section.menu_actions(is_admin).into_iter().map(|action| {
                        let navigate = navigate.clone();
                        view! {
                            <button
                                class="mega-menu-card"
                                on:click=move |_| {
                                    navigate(action.path, Default::default());
                                    set_is_open.set(false);
                                }
                            >
                                <div class="mega-menu-card-title">{action.label}</div>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MegaMenuBar(#[prop(into)] is_admin: Signal<bool>) -> impl IntoView {
    move || {
        let is_admin = is_admin.get();
        menu_sections(is_admin)
            .into_iter()
            .map(|section| view! { <MegaMenuCategory section=section is_admin=is_admin /> })
            .collect_view()
    }
}
