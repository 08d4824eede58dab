//! PageFrame: root wrapper for every routed page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                 `"{entity}--{category}"`, e.g. `"a003_vendor--list"`
//!   - `data-page-category` one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_LIST;
//!
//! #[component]
//! pub fn VendorFinalSettlement() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a003_vendor--list" category=PAGE_CAT_LIST>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Adds the BEM modifier class for the category:
/// - `detail`    → `page page--detail`
/// - `dashboard` → `page page--dashboard`
/// - anything else → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
