pub mod aggregate;
pub mod form;
pub mod validation;

pub use aggregate::*;
pub use form::{ModelCreateForm, ModelField};
pub use validation::validate_model;
