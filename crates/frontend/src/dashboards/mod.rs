pub mod d400_vendor_status;

pub use d400_vendor_status::context::{use_dashboard_data, DashboardDataContext};
pub use d400_vendor_status::ui::VendorStatusChart;
