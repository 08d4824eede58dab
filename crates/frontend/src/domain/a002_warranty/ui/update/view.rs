use super::view_model::WarrantyUpdateVm;
use crate::shared::components::table::format_money;
use crate::shared::components::{use_toasts, PageHeader, YesNoToggle};
use crate::shared::config::use_settings;
use crate::shared::date_utils::{format_optional_date, to_input_value};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_model::has_rate_table;
use contracts::domain::a002_warranty::{WarrantyUpdateForm, SPARE_LINES};
use contracts::domain::common::YesNo;
use contracts::shared::form_value::{amount_to_input, parse_amount};
use leptos::prelude::*;
use thaw::*;

type Form = WarrantyUpdateForm;

const REWINDING_DISABLED_TITLE: &str = "Available only for LT MOTOR / FHP MOTOR divisions";

fn field_class(vm: WarrantyUpdateVm, field: &'static str) -> impl Fn() -> &'static str {
    move || {
        if vm.is_flagged(field) {
            "form__input input--error"
        } else {
            "form__input"
        }
    }
}

fn date_field(
    vm: WarrantyUpdateVm,
    label: &'static str,
    field: &'static str,
    get: fn(&Form) -> &str,
    set: fn(&mut Form, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                type="date"
                id=field
                name=field
                class=field_class(vm, field)
                prop:value=move || vm.read(|f| to_input_value(get(f))).unwrap_or_default()
                on:change=move |ev| vm.edit(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

fn amount_field(
    vm: WarrantyUpdateVm,
    label: &'static str,
    field: &'static str,
    get: fn(&Form) -> Option<f64>,
    set: fn(&mut Form, Option<f64>),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                type="number"
                id=field
                name=field
                min="0"
                class=field_class(vm, field)
                prop:value=move || vm.read(|f| amount_to_input(get(f))).unwrap_or_default()
                on:input=move |ev| vm.edit(|f| set(f, parse_amount(&event_target_value(&ev))))
            />
        </div>
    }
}

fn text_field(
    vm: WarrantyUpdateVm,
    label: &'static str,
    field: &'static str,
    get: fn(&Form) -> &str,
    set: fn(&mut Form, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                type="text"
                id=field
                name=field
                class=field_class(vm, field)
                prop:value=move || vm.read(|f| get(f).to_string()).unwrap_or_default()
                on:input=move |ev| vm.edit(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

fn flag_field(
    vm: WarrantyUpdateVm,
    label: &'static str,
    field: &'static str,
    get: fn(&Form) -> YesNo,
    set: fn(&mut Form, YesNo),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <YesNoToggle
                name=field
                value=Signal::derive(move || vm.read(get).unwrap_or_default())
                invalid=Signal::derive(move || vm.is_flagged(field))
                on_change=Callback::new(move |v| vm.edit(|f| set(f, v)))
            />
        </div>
    }
}

fn read_only(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <div class="form__value">{if value.is_empty() { "-".to_string() } else { value }}</div>
        </div>
    }
}

fn spare_rows(vm: WarrantyUpdateVm) -> impl IntoView {
    (0..SPARE_LINES)
        .map(|i| {
            let cost_field: &'static str =
                ["cost1", "cost2", "cost3", "cost4", "cost5", "cost6"][i];
            view! {
                <div class="form__row">
                    <input
                        type="text"
                        class="form__input"
                        placeholder=format!("Spare {}", i + 1)
                        prop:value=move || vm.read(|f| f.spares[i].description.clone()).unwrap_or_default()
                        on:input=move |ev| vm.edit(|f| f.spares[i].description = event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        name=cost_field
                        class=field_class(vm, cost_field)
                        placeholder="Cost"
                        prop:value=move || vm.read(|f| amount_to_input(f.spares[i].cost)).unwrap_or_default()
                        on:input=move |ev| vm.edit(|f| f.spares[i].cost = parse_amount(&event_target_value(&ev)))
                    />
                </div>
            }
        })
        .collect_view()
}

fn record_form(vm: WarrantyUpdateVm, snapshot: Form) -> impl IntoView {
    let rewinding_enabled = has_rate_table(&snapshot.division);

    view! {
        <form
            class="details-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command();
            }
        >
            <section class="form__section">
                <h3 class="form__section-title">"Record"</h3>
                {read_only("SRF Number", snapshot.srf_number.clone())}
                {read_only("Name", snapshot.name.clone())}
                {read_only("Division", snapshot.division.clone())}
                {read_only("Model", snapshot.model.clone())}
            </section>

            <section class="form__section">
                <h3 class="form__section-title">"Vendor"</h3>
                {read_only("Challan Number", snapshot.challan_number.clone())}
                <div class="form-group">
                    <label>"Challan Date"</label>
                    <div class=field_class(vm, "challan_date")>
                        {format_optional_date(Some(&snapshot.challan_date))}
                    </div>
                </div>
                {date_field(vm, "Return Date", "vendor_date2", |f| &f.vendor_date2, |f, v| f.vendor_date2 = v)}
                {amount_field(vm, "Vendor Rewinding Cost", "vendor_cost1", |f| f.vendor_cost1, |f, v| f.vendor_cost1 = v)}
                {amount_field(vm, "Vendor Other Cost", "vendor_cost2", |f| f.vendor_cost2, |f, v| f.vendor_cost2 = v)}
                {flag_field(vm, "Paint", "vendor_paint", |f| f.vendor_paint, |f, v| f.vendor_paint = v)}
                {amount_field(vm, "Paint Cost", "vendor_paint_cost", |f| f.vendor_paint_cost, |f, v| f.vendor_paint_cost = v)}
                {flag_field(vm, "Stator", "vendor_stator", |f| f.vendor_stator, |f, v| f.vendor_stator = v)}
                {amount_field(vm, "Stator Cost", "vendor_stator_cost", |f| f.vendor_stator_cost, |f, v| f.vendor_stator_cost = v)}
                {flag_field(vm, "Leg", "vendor_leg", |f| f.vendor_leg, |f, v| f.vendor_leg = v)}
                {amount_field(vm, "Leg Cost", "vendor_leg_cost", |f| f.vendor_leg_cost, |f, v| f.vendor_leg_cost = v)}
                <div class="form__total">
                    "Vendor Cost: "
                    {move || vm.read(|f| format_money(f.vendor_cost())).unwrap_or_default()}
                </div>
            </section>

            <section class="form__section">
                <h3 class="form__section-title">"Repair"</h3>
                {date_field(vm, "Repair Date", "repair_date", |f| &f.repair_date, |f, v| f.repair_date = v)}
                {spare_rows(vm)}
                <div class="form__total">
                    "Spare Cost: "
                    {move || vm.read(|f| format_money(f.spare_cost())).unwrap_or_default()}
                </div>
                <div class="form-group">
                    <label>"Rewinding Done"</label>
                    <YesNoToggle
                        name="rewinding_done"
                        value=Signal::derive(move || vm.read(|f| f.rewinding_done).unwrap_or_default())
                        disabled=!rewinding_enabled
                        disabled_title=REWINDING_DISABLED_TITLE
                        on_change=Callback::new(move |v| vm.edit(|f| f.rewinding_done = v))
                    />
                </div>
                {amount_field(vm, "Rewinding Cost", "rewinding_cost", |f| f.rewinding_cost, |f, v| f.rewinding_cost = v)}
                {amount_field(vm, "Other Cost", "other_cost", |f| f.other_cost, |f, v| f.other_cost = v)}
            </section>

            <section class="form__section">
                <h3 class="form__section-title">"Delivery"</h3>
                {date_field(vm, "Delivery Date", "delivery_date", |f| &f.delivery_date, |f, v| f.delivery_date = v)}
                {text_field(vm, "Work Done", "work_done", |f| &f.work_done, |f, v| f.work_done = v)}
                {amount_field(vm, "Final Amount", "final_amount", |f| f.final_amount, |f, v| f.final_amount = v)}
                {amount_field(vm, "Receive Amount", "receive_amount", |f| f.receive_amount, |f, v| f.receive_amount = v)}
                {flag_field(vm, "Chargeable", "chargeable", |f| f.chargeable, |f, v| f.chargeable = v)}
                {flag_field(vm, "GST", "gst", |f| f.gst, |f, v| f.gst = v)}
                {text_field(vm, "PC Number", "pc_number", |f| &f.pc_number, |f, v| f.pc_number = v)}
                {text_field(vm, "Invoice Number", "invoice_number", |f| &f.invoice_number, |f, v| f.invoice_number = v)}
                {flag_field(vm, "Final Status", "final_status", |f| f.final_status, |f, v| f.final_status = v)}
            </section>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    disabled=Signal::derive(move || vm.submitting.get())
                >
                    {icon("save")}
                    {move || if vm.submitting.get() { " Updating..." } else { " Update Record" }}
                </Button>
            </div>
        </form>
    }
}

#[component]
pub fn WarrantyUpdatePage() -> impl IntoView {
    let vm = WarrantyUpdateVm::new(use_toasts(), &use_settings());
    vm.load_pending();

    // Re-render the form only when another SRF is loaded
    let loaded_srf = Memo::new(move |_| vm.read(|f| f.srf_number.clone()));

    view! {
        <PageFrame page_id="a002_warranty--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Update Warranty SRF">
                <select
                    class="form__input"
                    prop:value=move || vm.selected_srf.get()
                    disabled=move || vm.loading.get() || vm.submitting.get()
                    on:change=move |ev| vm.select_command(event_target_value(&ev))
                >
                    <option value="">"Select SRF Number"</option>
                    <For
                        each=move || vm.pending.get()
                        key=|row| row.srf_number.clone()
                        children=|row| {
                            let label = format!("{} - {}", row.srf_number, row.name);
                            view! { <option value=row.srf_number.clone()>{label}</option> }
                        }
                    />
                </select>
            </PageHeader>

            <div class="page__content">
                {move || vm.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Show when=move || vm.loading.get()>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                {move || {
                    loaded_srf.get()?;
                    let snapshot = vm.form.get_untracked()?;
                    Some(record_form(vm, snapshot))
                }}
            </div>
        </PageFrame>
    }
}
