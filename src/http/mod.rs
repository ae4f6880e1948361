//! HTTP client module
//!
//! Provides the transport used by the fetchers.
//!
//! # Features
//!
//! - **Single GET per call**: no retries, no status interpretation
//! - **TLS setup**: custom root CA, client identity, invalid-cert override
//! - **Authentication**: basic auth scoped to the configured host
//! - **Error classification**: every failure becomes a typed transport error

mod client;

pub use client::{HttpClient, ResourceClient};
