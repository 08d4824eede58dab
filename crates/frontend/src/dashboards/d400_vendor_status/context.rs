//! Dashboard aggregates shared by the menu dashboard widgets.
//!
//! Loaded once per session; later visits of the dashboard reuse the data.

use super::api;
use contracts::dashboards::d400_vendor_status::DashboardData;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct DashboardDataContext {
    pub data: RwSignal<DashboardData>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    loaded: StoredValue<bool>,
}

impl DashboardDataContext {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(DashboardData::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            loaded: StoredValue::new(false),
        }
    }

    pub fn load_once(&self) {
        if self.loaded.get_value() {
            return;
        }
        self.loaded.set_value(true);

        let ctx = *self;
        ctx.loading.set(true);
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(data) => {
                    log::debug!("Dashboard loaded: {} status rows", data.status_rows().len());
                    ctx.data.set(data);
                }
                Err(e) => {
                    log::error!("Dashboard load failed: {}", e);
                    ctx.error.set(Some(e.message));
                    // Allow a retry on the next visit
                    ctx.loaded.set_value(false);
                }
            }
            ctx.loading.set(false);
        });
    }
}

impl Default for DashboardDataContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_data() -> DashboardDataContext {
    use_context::<DashboardDataContext>().expect("DashboardDataContext not found in context")
}
