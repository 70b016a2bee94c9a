//! Appraisal due-date projection.

pub mod ports;
pub mod projector;
mod service;

pub use service::AppraisalService;
