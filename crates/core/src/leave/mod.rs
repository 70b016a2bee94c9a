//! Holiday request handling.

pub mod ports;
mod service;

pub use service::LeaveService;
