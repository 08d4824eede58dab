mod chart;

pub use chart::VendorStatusChart;
