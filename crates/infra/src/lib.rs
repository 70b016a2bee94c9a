//! # StaffHub Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry and backoff
//! - Data service adapter implementing the repository ports
//! - Read-through caching with request coalescing
//! - Configuration loading (environment and files)
//! - Telemetry initialization
//!
//! ## Architecture
//! - Implements traits defined in `staffhub-core`
//! - Depends on `staffhub-common`, `staffhub-domain` and `staffhub-core`
//! - Contains all "impure" code (network I/O, environment, filesystem)

#![forbid(unsafe_code)]

pub mod config;
pub mod data_service;
pub mod errors;
pub mod http;
pub mod telemetry;

// Re-export commonly used items
pub use data_service::{CachedDataService, DataServiceClient};
pub use errors::InfraError;
pub use http::HttpClient;
