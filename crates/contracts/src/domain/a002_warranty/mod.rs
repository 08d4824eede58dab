pub mod aggregate;
pub mod form;
pub mod validation;

pub use aggregate::*;
pub use form::{SpareLine, WarrantyUpdateForm, SPARE_LINES};
pub use validation::{validate_warranty_update, WarrantyUpdateValidator};
