pub mod api_error;
pub mod form_value;
pub mod settings;
pub mod validation;
