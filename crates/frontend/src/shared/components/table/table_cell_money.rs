//! Table cell for money values
//!
//! ```ignore
//! <TableCellMoney value=row.vendor_cost1 />
//! <TableCellMoney value=Some(total) bold=true />
//! ```

use super::number_format::{format_money, format_rupees};
use leptos::prelude::*;
use thaw::*;

/// Right-aligned money cell, `-` when the value is missing.
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,

    /// Prefix the rupee sign
    #[prop(optional, default = false)]
    show_currency: bool,

    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) if show_currency => format_rupees(v),
        Some(v) => format_money(v),
        None => "-".to_string(),
    };

    let cell_style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
