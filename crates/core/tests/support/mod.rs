//! Shared test helpers for `staffhub-core` integration tests.
//!
//! In-memory mocks for every repository port plus fixture builders, so
//! service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
