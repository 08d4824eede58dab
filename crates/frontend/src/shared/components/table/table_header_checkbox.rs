//! Select-all checkbox for a table header
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     checked=Signal::derive(move || vm.all_checked())
//!     indeterminate=Signal::derive(move || vm.partially_checked())
//!     on_change=Callback::new(move |check_all: bool| vm.select_all(check_all))
//! />
//! ```

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Header checkbox with checked, unchecked and indeterminate states.
///
/// The owner computes the state; the component only reflects it and reports
/// clicks (`true` = select all, `false` = clear).
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] checked: Signal<bool>,

    /// Some but not all rows are selected
    #[prop(into)]
    indeterminate: Signal<bool>,

    #[prop(optional, into)] disabled: Signal<bool>,

    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` exists only as a DOM property
    Effect::new(move |_| {
        let is_indeterminate = indeterminate.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
