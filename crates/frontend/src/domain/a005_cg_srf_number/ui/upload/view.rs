use super::view_model::{CgSrfUploadVm, FILE_INPUT_ID};
use crate::shared::components::{use_toasts, PageHeader};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn CgSrfUploadPage() -> impl IntoView {
    let vm = CgSrfUploadVm::new(use_toasts());

    let on_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            vm.pick_command(&input);
        }
    };

    view! {
        <PageFrame page_id="a005_cg_srf_number--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title="Upload CG SRF Numbers">
                {()}
            </PageHeader>

            <div class="page__content">
                <div class="upload-card">
                    <div class="upload-card__icon">{icon("upload")}</div>
                    <Show
                        when=move || vm.file.with(Option::is_some)
                        fallback=move || view! {
                            <div class="upload-card__prompt">"Select a CSV file"</div>
                            <div class="upload-card__hint">"Only .csv files are supported"</div>
                            <label class="upload-card__browse">
                                "Browse File"
                                <input
                                    id=FILE_INPUT_ID
                                    type="file"
                                    hidden=true
                                    accept=".csv,text/csv"
                                    on:change=on_file_change
                                />
                            </label>
                        }
                    >
                        <div class="upload-card__file">
                            <span>{move || vm.file_name().unwrap_or_default()}</span>
                            <button
                                class="upload-card__clear"
                                title="Remove"
                                disabled=move || vm.uploading.get()
                                on:click=move |_| vm.clear()
                            >
                                "×"
                            </button>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Button
                            disabled=Signal::derive(move || vm.uploading.get())
                            on_click=move |_| vm.upload_command()
                        >
                            {move || if vm.uploading.get() { "Uploading..." } else { "Upload File" }}
                        </Button>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
