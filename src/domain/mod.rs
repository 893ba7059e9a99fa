//! Domain types consumed by the request table.

pub mod request;
pub mod sort;
pub mod types;
