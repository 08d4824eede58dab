pub mod a001_model;
pub mod a002_warranty;
pub mod a003_vendor;
pub mod a004_complaint_number;
pub mod a005_cg_srf_number;
