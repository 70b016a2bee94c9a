//! # StaffHub Domain
//!
//! Business domain types and models for StaffHub.
//!
//! This crate contains:
//! - Domain data types (Employee, Shift, HolidayRequest, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and the nanosecond timestamp layer
//!
//! ## Architecture
//! - No dependencies on other StaffHub crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export timestamp conversion utilities
pub use utils::timestamp;
