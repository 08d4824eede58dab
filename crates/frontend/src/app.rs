use crate::dashboards::DashboardDataContext;
use crate::routes::routes::AppRoutes;
use crate::shared::components::{ToastHost, ToastService};
use crate::shared::config::settings;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let settings = settings().clone();
    provide_context(ToastService::new(settings.ui.toast_dismiss_ms));
    provide_context(settings);
    provide_context(DashboardDataContext::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <Router>
                    <AppRoutes />
                </Router>
                <ToastHost />
            </AuthProvider>
        </ConfigProvider>
    }
}
