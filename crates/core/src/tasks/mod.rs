//! To-do task handling.

pub mod ports;
mod service;

pub use service::TaskService;
