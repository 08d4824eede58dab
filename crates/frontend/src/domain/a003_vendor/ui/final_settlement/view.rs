use super::view_model::VendorFinalSettlementVm;
use crate::shared::components::table::{format_rupees, TableCellMoney, TableHeaderCheckbox};
use crate::shared::components::{use_toasts, PageHeader};
use crate::shared::config::use_settings;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_vendor::settlement::ComplaintCell;
use contracts::domain::a003_vendor::VendorFinalSettlementRecord;
use leptos::prelude::*;
use thaw::*;

fn complaint_view(vm: VendorFinalSettlementVm, index: usize) -> impl IntoView {
    move || match vm.cell(index) {
        ComplaintCell::Empty => view! { <span>"-"</span> }.into_any(),
        ComplaintCell::Valid { number, tooltip } => view! {
            <span class="complaint complaint--valid" title=tooltip>{number}</span>
        }
        .into_any(),
        ComplaintCell::Invalid { number, tooltip } => view! {
            <span
                class="complaint complaint--invalid"
                title=tooltip
                on:click=move |_| vm.edit_complaint(index)
            >
                {number}
            </span>
        }
        .into_any(),
    }
}

fn settlement_row(
    vm: VendorFinalSettlementVm,
    index: usize,
    row: VendorFinalSettlementRecord,
) -> impl IntoView {
    view! {
        <TableRow class:table__row--blocked=move || vm.is_blocked(index)>
            <TableCell class="fixed-checkbox-column">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || vm.is_selected(index)
                    disabled=move || vm.is_blocked(index)
                    on:change=move |ev| vm.toggle(index, event_target_checked(&ev))
                />
            </TableCell>
            <TableCell><TableCellLayout truncate=true>{row.srf_number.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout truncate=true>{row.name.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout truncate=true>{row.model.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{complaint_view(vm, index)}</TableCellLayout></TableCell>
            <TableCellMoney value=row.vendor_cost1 />
            <TableCellMoney value=row.vendor_cost2 />
            <TableCellMoney value=row.vendor_paint_cost />
            <TableCellMoney value=row.vendor_stator_cost />
            <TableCellMoney value=row.vendor_leg_cost />
            <TableCellMoney value=Some(row.vendor_cost) bold=true />
        </TableRow>
    }
}

#[component]
fn ComplaintDialog(vm: VendorFinalSettlementVm) -> impl IntoView {
    let invalid = move || {
        vm.complaint_edit
            .with(|edit| edit.as_ref().is_some_and(|e| !e.is_length_valid()))
    };

    view! {
        <Show when=move || vm.complaint_edit.with(Option::is_some)>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <h3 class="modal__title">"Update Complaint Number"</h3>
                    <div class="form__row">
                        <input
                            type="text"
                            autofocus=true
                            class=move || if invalid() { "form__input input--error" } else { "form__input" }
                            prop:value=move || {
                                vm.complaint_edit
                                    .with(|edit| edit.as_ref().map(|e| e.value().to_string()))
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| vm.set_complaint_value(event_target_value(&ev))
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Button
                            disabled=Signal::derive(move || !vm.can_save_complaint())
                            on_click=move |_| vm.save_complaint_command()
                        >
                            {icon("upload")}
                        </Button>
                    </div>
                    <div class="modal__actions">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            button_type=ButtonType::Button
                            on_click=move |_| vm.cancel_complaint_edit()
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn VendorFinalSettlementPage() -> impl IntoView {
    let vm = VendorFinalSettlementVm::new(use_toasts(), &use_settings());
    vm.load();

    let has_rows = move || vm.rows.with(|rows| !rows.is_empty());

    view! {
        <PageFrame page_id="a003_vendor--list" category=PAGE_CAT_LIST>
            <PageHeader title="Vendor Final Settlement">
                <span class="page__counter">
                    "Total Records: "
                    {move || vm.rows.with(Vec::len)}
                </span>
                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Button
                    disabled=Signal::derive(move || vm.updating.get() || !has_rows())
                    on_click=move |_| vm.settle_command()
                >
                    {move || if vm.updating.get() { "Settling..." } else { "Settle Records" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || vm.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <Show
                        when=has_rows
                        fallback=|| view! { <div class="page__empty">"No Pending Records"</div> }
                    >
                        <div class="table-wrapper">
                            <Table attr:class="settlement-table">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCheckbox
                                            checked=Signal::derive(move || vm.all_checked())
                                            indeterminate=Signal::derive(move || vm.partially_checked())
                                            disabled=Signal::derive(move || vm.updating.get())
                                            on_change=Callback::new(move |check_all: bool| vm.select_all(check_all))
                                        />
                                        <TableHeaderCell resizable=false>"SRF Number"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Model"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Complaint No."</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"R. Cost"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"O. Cost"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Paint"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Stator"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Leg"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Total"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || vm.rows.get().into_iter().enumerate()
                                        key=|(_, row)| row.srf_number.clone()
                                        children=move |(index, row)| settlement_row(vm, index, row)
                                    />
                                </TableBody>
                            </Table>
                        </div>

                        <div class="table__summary">
                            <span>"Total Amount: " <strong>{move || format_rupees(vm.total())}</strong></span>
                            <span>"Selected Amount: " <strong>{move || format_rupees(vm.selected_amount())}</strong></span>
                        </div>
                    </Show>
                </Show>
            </div>

            <ComplaintDialog vm=vm />
        </PageFrame>
    }
}
