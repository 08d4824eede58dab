pub mod aggregate;
pub mod settlement;

pub use aggregate::*;
pub use settlement::{ComplaintEdit, SettlementSelection};
