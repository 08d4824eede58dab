//! ViewModel of the model create form

use crate::domain::a001_model::api;
use crate::shared::components::ToastService;
use crate::shared::reload::reload_after;
use contracts::domain::a001_model::{validate_model, ModelCreateForm, ModelField};
use contracts::shared::settings::{AppSettings, UiTiming};
use contracts::shared::validation::ValidationReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ModelCreateVm {
    pub form: RwSignal<ModelCreateForm>,
    pub submitting: RwSignal<bool>,
    pub charge_loading: RwSignal<bool>,
    report: Memo<ValidationReport>,
    ui: UiTiming,
    toasts: ToastService,
}

impl ModelCreateVm {
    pub fn new(toasts: ToastService, settings: &AppSettings) -> Self {
        let form = RwSignal::new(ModelCreateForm::default());
        Self {
            form,
            submitting: RwSignal::new(false),
            charge_loading: RwSignal::new(false),
            report: Memo::new(move |_| form.with(validate_model)),
            ui: settings.ui,
            toasts,
        }
    }

    /// Live validation result, used for field highlighting.
    pub fn report(&self) -> ValidationReport {
        self.report.get()
    }

    pub fn is_flagged(&self, field: &str) -> bool {
        self.report.with(|r| r.is_flagged(field))
    }

    pub fn set_division(&self, division: String) {
        self.form.update(|f| f.set_division(&division));
    }

    pub fn set_field(&self, field: ModelField, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn can_fetch_charge(&self) -> bool {
        self.form.with(|f| f.is_rewinding_locked())
            && !self.charge_loading.get()
            && !self.submitting.get()
    }

    /// Look up the rewinding charge in the rate table.
    pub fn fetch_charge_command(&self) {
        let Some(request) = self.form.with_untracked(|f| f.charge_request()) else {
            return;
        };
        let vm = *self;
        vm.charge_loading.set(true);
        spawn_local(async move {
            match api::fetch_rewinding_charge(&request).await {
                Ok(response) => vm.form.update(|f| f.apply_charge(response.rewinding_cost)),
                Err(e) => {
                    log::error!("Rewinding charge lookup failed: {}", e);
                    vm.toasts.api_error(&e);
                }
            }
            vm.charge_loading.set(false);
        });
    }

    pub fn submit_command(&self) {
        let report = self.form.with_untracked(validate_model);
        if let Some(message) = report.first_error() {
            self.toasts.warning(message, None);
            return;
        }

        let form = self.form.get_untracked();
        let payload = form.to_payload();
        let vm = *self;
        vm.submitting.set(true);
        spawn_local(async move {
            match api::create_model(&payload).await {
                Ok(_) => {
                    log::info!("Model {} created", payload.model);
                    vm.toasts.success(
                        "Model record created successfully!",
                        format!("Model Name : {}", form.model),
                    );
                    reload_after(vm.ui.reload_delay_ms);
                }
                Err(e) => {
                    log::error!("Model create failed: {}", e);
                    vm.toasts.api_error(&e);
                }
            }
            vm.submitting.set(false);
        });
    }
}
