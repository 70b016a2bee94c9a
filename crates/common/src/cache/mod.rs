//! Async read cache with TTL and eviction support.
//!
//! The cache is the client-side freshness layer in front of the remote
//! data service: entries carry a TTL, capacity is bounded, and whole
//! entity families can be invalidated by key prefix after a mutation.

mod config;
mod core;
mod stats;

pub use config::{CacheConfig, CacheConfigBuilder, EvictionPolicy};
pub use core::AsyncCache;
pub use stats::CacheStats;
