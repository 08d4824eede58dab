//! Types shared by several record kinds

pub mod yes_no;

pub use yes_no::YesNo;
