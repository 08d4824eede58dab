pub mod login;
pub mod menu_dashboard;
pub mod not_found;
