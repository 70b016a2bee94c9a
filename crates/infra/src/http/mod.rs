//! HTTP plumbing shared by the data service adapter.

mod client;

pub use client::HttpClient;
