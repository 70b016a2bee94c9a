//! Weekly scheduling: business-week partitioning and rota aggregation.

pub mod ports;
pub mod rota;
mod service;
pub mod week;

pub use service::RotaService;
