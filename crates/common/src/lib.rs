//! Shared async infrastructure for StaffHub crates.
//!
//! Home of the read cache, single-flight request coalescing, and the
//! clock abstraction used to make time-dependent code testable.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod cache;
pub mod singleflight;
pub mod time;
