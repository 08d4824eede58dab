mod view;
mod view_model;

pub use view::CgSrfUploadPage;
pub use view_model::CgSrfUploadVm;
