//! Stock request handling.

pub mod ports;
mod service;

pub use service::InventoryService;
