//! Warranty SRF update form
//!
//! - view_model.rs: record loading, validation and the save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::WarrantyUpdatePage;
pub use view_model::WarrantyUpdateVm;
