//! ViewModel of the warranty SRF update form

use crate::domain::a001_model::api as model_api;
use crate::domain::a002_warranty::api;
use crate::shared::components::ToastService;
use crate::shared::reload::reload_after;
use contracts::domain::a001_model::ModelRequest;
use contracts::domain::a002_warranty::{
    WarrantyPending, WarrantyUpdateForm, WarrantyUpdateValidator,
};
use contracts::shared::settings::{AppSettings, UiTiming};
use contracts::shared::validation::ValidationReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct WarrantyUpdateVm {
    pub pending: RwSignal<Vec<WarrantyPending>>,
    pub selected_srf: RwSignal<String>,
    pub form: RwSignal<Option<WarrantyUpdateForm>>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    validator: StoredValue<WarrantyUpdateValidator, LocalStorage>,
    report: Memo<ValidationReport>,
    ui: UiTiming,
    toasts: ToastService,
}

impl WarrantyUpdateVm {
    pub fn new(toasts: ToastService, settings: &AppSettings) -> Self {
        let form = RwSignal::new(None::<WarrantyUpdateForm>);
        let validator = StoredValue::new_local(WarrantyUpdateValidator::new(settings.validation));
        // Revalidated once per edit, shared by every field's highlight
        let report = Memo::new(move |_| {
            form.with(|f| {
                f.as_ref()
                    .map(|f| validator.with_value(|v| v.validate(f)))
                    .unwrap_or_default()
            })
        });
        Self {
            pending: RwSignal::new(Vec::new()),
            selected_srf: RwSignal::new(String::new()),
            form,
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            validator,
            report,
            ui: settings.ui,
            toasts,
        }
    }

    pub fn report(&self) -> ValidationReport {
        self.report.get()
    }

    pub fn is_flagged(&self, field: &str) -> bool {
        self.report.with(|r| r.is_flagged(field))
    }

    /// Apply an edit to the loaded record.
    pub fn edit(&self, f: impl FnOnce(&mut WarrantyUpdateForm)) {
        self.form.update(|form| {
            if let Some(form) = form.as_mut() {
                f(form);
            }
        });
    }

    pub fn read<T>(&self, f: impl FnOnce(&WarrantyUpdateForm) -> T) -> Option<T> {
        self.form.with(|form| form.as_ref().map(f))
    }

    pub fn load_pending(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_pending().await {
                Ok(rows) => vm.pending.set(rows),
                Err(e) => {
                    log::error!("Pending warranty list failed: {}", e);
                    vm.error.set(Some(e.message));
                }
            }
        });
    }

    /// Load an SRF for editing together with its model's rewinding base cost.
    pub fn select_command(&self, srf_number: String) {
        self.selected_srf.set(srf_number.clone());
        self.form.set(None);
        if srf_number.trim().is_empty() {
            return;
        }

        let vm = *self;
        vm.loading.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match api::fetch_by_srf_number(&srf_number).await {
                Ok(record) => {
                    let request = ModelRequest {
                        division: record.division.clone(),
                        model: Some(record.model.clone()),
                    };
                    let mut form = WarrantyUpdateForm::from_record(record);
                    match model_api::fetch_cost_details(&request).await {
                        Ok(details) => form.rewinding_base_cost = details.rewinding_cost,
                        Err(e) => log::warn!("No cost details for {}: {}", form.model, e),
                    }
                    vm.form.set(Some(form));
                }
                Err(e) => {
                    log::error!("Loading SRF {} failed: {}", srf_number, e);
                    vm.toasts.api_error(&e);
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn submit_command(&self) {
        let Some(form) = self.form.get_untracked() else {
            return;
        };
        let report = self.validator.with_value(|v| v.validate(&form));
        if let Some(message) = report.first_error() {
            self.toasts.warning(message, None);
            return;
        }

        let payload = form.to_payload();
        let srf_number = form.srf_number.clone();
        let vm = *self;
        vm.submitting.set(true);
        spawn_local(async move {
            match api::update_warranty(&srf_number, &payload).await {
                Ok(_) => {
                    log::info!("Warranty SRF {} updated", srf_number);
                    vm.toasts.success(
                        "Record updated successfully!",
                        format!("SRF Number: {}", srf_number),
                    );
                    reload_after(vm.ui.reload_delay_ms);
                }
                Err(e) => {
                    log::error!("Warranty update {} failed: {}", srf_number, e);
                    vm.toasts.api_error(&e);
                }
            }
            vm.submitting.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::YesNo;
    use contracts::shared::settings::ValidationThresholds;

    fn low_rewinding_cost() -> WarrantyUpdateForm {
        WarrantyUpdateForm {
            rewinding_done: YesNo::Yes,
            rewinding_cost: Some(300.0),
            ..Default::default()
        }
    }

    fn strict_settings() -> AppSettings {
        AppSettings {
            validation: ValidationThresholds {
                default_rewinding_base_cost: 500.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_highlighting_uses_given_thresholds() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = WarrantyUpdateVm::new(ToastService::default(), &strict_settings());
            assert!(!vm.is_flagged("rewinding_cost"));

            vm.form.set(Some(low_rewinding_cost()));
            assert!(vm.is_flagged("rewinding_cost"));
            assert!(vm.report().has_error("Rewinding Cost too Low"));

            let lenient = WarrantyUpdateVm::new(ToastService::default(), &AppSettings::default());
            lenient.form.set(Some(low_rewinding_cost()));
            assert!(!lenient.is_flagged("rewinding_cost"));
        });
    }

    #[test]
    fn test_report_follows_edits() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = WarrantyUpdateVm::new(ToastService::default(), &strict_settings());
            vm.form.set(Some(low_rewinding_cost()));
            assert!(vm.is_flagged("rewinding_cost"));

            vm.edit(|f| f.rewinding_cost = Some(600.0));
            assert!(!vm.is_flagged("rewinding_cost"));
            assert_eq!(vm.report(), vm.report());
        });
    }
}
