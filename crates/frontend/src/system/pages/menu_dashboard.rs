use crate::dashboards::{use_dashboard_data, VendorStatusChart};
use crate::layout::menu::dashboard_sections;
use crate::shared::components::card_animated::CARD_STAGGER_MS;
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Landing page: one card per menu section plus the vendor status chart.
#[component]
pub fn MenuDashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let dashboard = use_dashboard_data();
    dashboard.load_once();

    let cards = move || {
        dashboard_sections(auth_state.get().is_admin())
            .into_iter()
            .enumerate()
            .map(|(idx, section)| {
                let actions = section.dashboard_actions(auth_state.get_untracked().is_admin());
                let delay = idx as u32 * CARD_STAGGER_MS;
                view! {
                    <CardAnimated delay_ms=delay>
                        <div class="menu-card">
                            <div class="menu-card__header">
                                {icon(section.icon)}
                                <span class="menu-card__title">{section.title}</span>
                            </div>
                            <ul class="menu-card__actions">
                                {actions.into_iter().map(|action| view! {
                                    <li>
                                        <A href=action.path>
                                            {icon("chevron-right")}
                                            {action.label}
                                        </A>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </CardAnimated>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="d400_vendor_status--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Menu Dashboard">
                {()}
            </PageHeader>

            <div class="page__content">
                <div class="menu-grid">{cards}</div>

                {move || dashboard.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Show
                    when=move || !dashboard.loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <VendorStatusChart data=dashboard.data />
                </Show>
            </div>
        </PageFrame>
    }
}
