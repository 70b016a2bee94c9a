//! Payroll aggregation and CSV export.

pub mod aggregator;
pub mod csv;
pub mod ports;
mod service;

pub use service::{CsvExport, PayrollService};
