//! Shared types and pure business rules for the Smart Enterprise front end.
//!
//! Nothing in this crate touches the DOM or the network, so every rule here
//! is testable on the host.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
