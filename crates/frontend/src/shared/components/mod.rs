pub mod card_animated;
pub mod page_header;
pub mod table;
pub mod toast;
pub mod yes_no_toggle;

pub use card_animated::CardAnimated;
pub use page_header::PageHeader;
pub use toast::{use_toasts, ToastHost, ToastService};
pub use yes_no_toggle::YesNoToggle;
