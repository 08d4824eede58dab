//! Model create form
//!
//! - view_model.rs: form state, validation and commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ModelCreatePage;
pub use view_model::ModelCreateVm;
