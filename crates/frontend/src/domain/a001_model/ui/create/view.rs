use super::view_model::ModelCreateVm;
use crate::shared::components::{use_toasts, PageHeader};
use crate::shared::config::use_settings;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_model::{ModelField, DIVISIONS, REWINDING_TYPES};
use leptos::prelude::*;
use thaw::*;

fn input_class(vm: ModelCreateVm, field: &'static str) -> impl Fn() -> &'static str {
    move || {
        if vm.is_flagged(field) {
            "form__input input--error"
        } else {
            "form__input"
        }
    }
}

#[component]
pub fn ModelCreatePage() -> impl IntoView {
    let vm = ModelCreateVm::new(use_toasts(), &use_settings());

    let not_lt = move || !vm.form.with(|f| f.is_lt_motor());
    let not_fhp = move || !vm.form.with(|f| f.is_fhp_motor());
    let locked = move || vm.form.with(|f| f.is_rewinding_locked());

    view! {
        <PageFrame page_id="a001_model--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Create Model Record">
                {()}
            </PageHeader>

            <div class="page__content">
                <form
                    class="details-form"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                >
                    <div class="form-group">
                        <label for="division">"Division" <span class="form__required">"*"</span></label>
                        <select
                            id="division"
                            name="division"
                            class=input_class(vm, "division")
                            prop:value=move || vm.form.with(|f| f.division.clone())
                            disabled=move || vm.submitting.get()
                            on:change=move |ev| vm.set_division(event_target_value(&ev))
                        >
                            <option value="" disabled=true></option>
                            {DIVISIONS
                                .iter()
                                .map(|d| view! { <option value=*d>{*d}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="model">"Model" <span class="form__required">"*"</span></label>
                        <input
                            type="text"
                            id="model"
                            name="model"
                            maxlength="30"
                            class=input_class(vm, "model")
                            prop:value=move || vm.form.with(|f| f.model.clone())
                            disabled=move || vm.submitting.get()
                            on:input=move |ev| vm.set_field(ModelField::Model, event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="frame">"Frame"</label>
                        <input
                            type="text"
                            id="frame"
                            name="frame"
                            maxlength="10"
                            class=input_class(vm, "frame")
                            prop:value=move || vm.form.with(|f| f.frame.clone())
                            disabled=move || vm.submitting.get() || not_lt()
                            placeholder=move || if not_lt() { "Frame is Disabled" } else { "" }
                            on:input=move |ev| vm.set_field(ModelField::Frame, event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="hp_rating">"HP Rating"</label>
                        <input
                            type="text"
                            id="hp_rating"
                            name="hp_rating"
                            maxlength="5"
                            class=input_class(vm, "hp_rating")
                            prop:value=move || vm.form.with(|f| f.hp_rating.clone())
                            disabled=move || vm.submitting.get() || not_fhp()
                            placeholder=move || if not_fhp() { "HP Rating is disabled" } else { "" }
                            on:input=move |ev| vm.set_field(ModelField::HpRating, event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="winding_type">"Rewinding Type"</label>
                        <select
                            id="winding_type"
                            name="winding_type"
                            class=input_class(vm, "rewinding_type")
                            prop:value=move || vm.form.with(|f| f.rewinding_type.clone())
                            disabled=move || vm.submitting.get() || not_fhp()
                            title=move || if not_fhp() { "Rewinding Type is disabled for this division" } else { "" }
                            on:change=move |ev| vm.set_field(ModelField::RewindingType, event_target_value(&ev))
                        >
                            <option value=""></option>
                            {REWINDING_TYPES
                                .iter()
                                .map(|t| view! { <option value=*t>{*t}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="rewinding_charge">
                            "Rewinding Charge" <span class="form__required">"*"</span>
                        </label>
                        <div class="form__row">
                            <input
                                type="number"
                                id="rewinding_charge"
                                name="rewinding_charge"
                                class=input_class(vm, "rewinding_charge")
                                prop:value=move || vm.form.with(|f| f.rewinding_charge.clone())
                                readonly=locked
                                disabled=move || vm.submitting.get()
                                on:input=move |ev| vm.set_field(ModelField::RewindingCharge, event_target_value(&ev))
                            />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                button_type=ButtonType::Button
                                attr:title=move || if locked() { "Fetch rewinding charge" } else { "Fetch disabled for this division" }
                                disabled=Signal::derive(move || !vm.can_fetch_charge())
                                on_click=move |_| vm.fetch_charge_command()
                            >
                                {move || if vm.charge_loading.get() { "Fetching..." } else { "Fetch" }}
                            </Button>
                        </div>
                    </div>

                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=Signal::derive(move || vm.submitting.get())
                        >
                            {icon("save")}
                            {move || if vm.submitting.get() { " Creating..." } else { " Create Record" }}
                        </Button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
