//! ViewModel of the CG SRF number upload card

use crate::domain::a005_cg_srf_number::api;
use crate::shared::components::ToastService;
use contracts::domain::a005_cg_srf_number::is_csv_file;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

pub const FILE_INPUT_ID: &str = "cg-srf-number-file-input";

#[derive(Clone, Copy)]
pub struct CgSrfUploadVm {
    pub file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub uploading: RwSignal<bool>,
    toasts: ToastService,
}

impl CgSrfUploadVm {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            file: RwSignal::new_local(None),
            uploading: RwSignal::new(false),
            toasts,
        }
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.with(|f| f.as_ref().map(web_sys::File::name))
    }

    /// Accepts the picked file if it is a CSV, otherwise resets the input.
    pub fn pick_command(&self, input: &web_sys::HtmlInputElement) {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if !is_csv_file(&file.name(), &file.type_()) {
            log::warn!("Rejected upload of {}", file.name());
            self.toasts
                .warning("Invalid file type", Some("Only CSV files are allowed".to_string()));
            input.set_value("");
            return;
        }
        self.file.set(Some(file));
    }

    pub fn clear(&self) {
        self.file.set(None);
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            input.set_value("");
        }
    }

    pub fn upload_command(&self) {
        let file = self.file.get_untracked();
        if file.is_none() {
            return;
        }

        let vm = *self;
        vm.uploading.set(true);
        spawn_local(async move {
            match api::upload_cg_srf_numbers(file).await {
                Ok(outcome) => {
                    log::info!("CG SRF numbers uploaded: {}", outcome.message);
                    vm.toasts.success(outcome.message, outcome.resolution);
                    vm.clear();
                }
                Err(e) => {
                    log::error!("CG SRF upload failed: {}", e);
                    vm.toasts.api_error(&e);
                }
            }
            vm.uploading.set(false);
        });
    }
}
