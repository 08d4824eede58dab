pub mod chart;
pub mod dto;

pub use chart::{
    group_by_division, needs_replay, percent, reveal_schedule, BarWidth, DivisionStatus,
    RevealState, RevealStep, Segment, SettledSplit,
};
pub use dto::{DashboardData, StatusRow, VendorDashboard};
