//! Adapter for the remote HR data service.
//!
//! [`DataServiceClient`] speaks plain JSON over HTTP and implements every
//! repository port from `staffhub-core`. [`CachedDataService`] wraps any
//! such implementation with a read-through cache and request coalescing.

mod cached;
mod client;

pub use cached::CachedDataService;
pub use client::DataServiceClient;
