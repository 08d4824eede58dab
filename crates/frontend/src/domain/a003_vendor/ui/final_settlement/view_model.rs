//! ViewModel of the vendor final settlement table

use crate::domain::a003_vendor::api;
use crate::domain::a004_complaint_number::api as complaint_api;
use crate::shared::components::ToastService;
use crate::shared::reload::reload_after;
use contracts::domain::a003_vendor::settlement::{complaint_cell, total_amount, ComplaintCell};
use contracts::domain::a003_vendor::{
    ComplaintEdit, SettlementSelection, VendorFinalSettlementRecord,
};
use contracts::domain::a004_complaint_number::ComplaintStatusMap;
use contracts::shared::settings::{AppSettings, UiTiming, ValidationThresholds};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct VendorFinalSettlementVm {
    pub rows: RwSignal<Vec<VendorFinalSettlementRecord>>,
    pub statuses: RwSignal<ComplaintStatusMap>,
    pub selection: RwSignal<SettlementSelection>,
    pub loading: RwSignal<bool>,
    pub updating: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Open complaint number correction dialog
    pub complaint_edit: RwSignal<Option<ComplaintEdit>>,
    pub complaint_saving: RwSignal<bool>,
    thresholds: ValidationThresholds,
    ui: UiTiming,
    toasts: ToastService,
}

impl VendorFinalSettlementVm {
    pub fn new(toasts: ToastService, settings: &AppSettings) -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            statuses: RwSignal::new(ComplaintStatusMap::default()),
            selection: RwSignal::new(SettlementSelection::new()),
            loading: RwSignal::new(false),
            updating: RwSignal::new(false),
            error: RwSignal::new(None),
            complaint_edit: RwSignal::new(None),
            complaint_saving: RwSignal::new(false),
            thresholds: settings.validation,
            ui: settings.ui,
            toasts,
        }
    }

    /// Loads the complaint statuses and the pending records.
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            // Without statuses every complaint renders as unconfirmed
            match complaint_api::fetch_complaint_numbers().await {
                Ok(list) => vm.statuses.set(ComplaintStatusMap::from_list(list)),
                Err(e) => log::warn!("Complaint numbers unavailable: {}", e),
            }
        });

        vm.loading.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match api::fetch_final_settlement().await {
                Ok(rows) => {
                    log::info!("Loaded {} vendor settlement records", rows.len());
                    vm.selection.update(|s| s.clear());
                    vm.rows.set(rows);
                }
                Err(e) => {
                    log::error!("Vendor settlement list failed: {}", e);
                    vm.error.set(Some(e.message));
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn total(&self) -> f64 {
        self.rows.with(|rows| total_amount(rows))
    }

    pub fn selected_amount(&self) -> f64 {
        let selection = self.selection.get();
        self.rows.with(|rows| selection.selected_amount(rows))
    }

    pub fn cell(&self, index: usize) -> ComplaintCell {
        let statuses = self.statuses.get();
        self.rows
            .with(|rows| rows.get(index).map(|row| complaint_cell(row, &statuses)))
            .unwrap_or(ComplaintCell::Empty)
    }

    pub fn is_blocked(&self, index: usize) -> bool {
        matches!(self.cell(index), ComplaintCell::Invalid { .. })
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.with(|s| s.is_selected(index))
    }

    pub fn all_checked(&self) -> bool {
        let total = self.rows.with(Vec::len);
        self.selection.with(|s| s.is_all_checked(total))
    }

    pub fn partially_checked(&self) -> bool {
        let total = self.rows.with(Vec::len);
        self.selection.with(|s| s.is_indeterminate(total))
    }

    pub fn toggle(&self, index: usize, checked: bool) {
        if checked && self.is_blocked(index) {
            return;
        }
        self.selection.update(|s| s.toggle(index, checked));
    }

    pub fn select_all(&self, checked: bool) {
        let statuses = self.statuses.get_untracked();
        self.rows.with_untracked(|rows| {
            self.selection.update(|s| s.set_all(checked, rows, &statuses));
        });
    }

    pub fn settle_command(&self) {
        let payload = self
            .rows
            .with_untracked(|rows| self.selection.with_untracked(|s| s.payload(rows)));
        if payload.is_empty() {
            self.toasts.warning("No rows selected.", None);
            return;
        }

        let vm = *self;
        vm.updating.set(true);
        spawn_local(async move {
            match api::update_final_settlement(&payload).await {
                Ok(_) => {
                    log::info!("Settled {} vendor records", payload.len());
                    vm.toasts.success("Records settled successfully!", "");
                    reload_after(vm.ui.reload_delay_ms);
                }
                Err(e) => {
                    log::error!("Vendor settlement failed: {}", e);
                    vm.toasts.api_error(&e);
                }
            }
            vm.updating.set(false);
        });
    }

    /// Opens the correction dialog for an unconfirmed complaint.
    pub fn edit_complaint(&self, index: usize) {
        if !self.is_blocked(index) {
            return;
        }
        let srf_number = self
            .rows
            .with_untracked(|rows| rows.get(index).map(|r| r.srf_number.clone()));
        if let Some(srf_number) = srf_number {
            self.complaint_edit
                .set(Some(ComplaintEdit::new(srf_number, &self.thresholds)));
        }
    }

    pub fn set_complaint_value(&self, input: String) {
        self.complaint_edit.update(|edit| {
            if let Some(edit) = edit.as_mut() {
                edit.set_value(&input);
            }
        });
    }

    pub fn can_save_complaint(&self) -> bool {
        !self.complaint_saving.get()
            && self
                .complaint_edit
                .with(|edit| edit.as_ref().is_some_and(ComplaintEdit::is_length_valid))
    }

    pub fn cancel_complaint_edit(&self) {
        self.complaint_edit.set(None);
    }

    pub fn save_complaint_command(&self) {
        let Some(payload) = self
            .complaint_edit
            .with_untracked(|edit| edit.as_ref().and_then(ComplaintEdit::to_payload))
        else {
            return;
        };

        let vm = *self;
        vm.complaint_saving.set(true);
        spawn_local(async move {
            match api::update_complaint_number(&payload).await {
                Ok(_) => {
                    log::info!("Complaint number of {} updated", payload.srf_number);
                    vm.toasts.success(
                        "Complaint number updated",
                        format!("SRF Number: {}", payload.srf_number),
                    );
                    vm.complaint_edit.set(None);
                    reload_after(vm.ui.complaint_reload_delay_ms);
                }
                Err(e) => {
                    log::error!("Complaint number update failed: {}", e);
                    vm.toasts.api_error(&e);
                }
            }
            vm.complaint_saving.set(false);
        });
    }
}
