mod view;
mod view_model;

pub use view::VendorFinalSettlementPage;
pub use view_model::VendorFinalSettlementVm;
