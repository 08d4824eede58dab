pub mod client;
pub mod endpoints;

pub use endpoints::Endpoint;
