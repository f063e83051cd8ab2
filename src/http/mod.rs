//! HTTP client module
//!
//! Thin wrapper over `reqwest` used by the fetcher.
//!
//! # Features
//!
//! - **Builder config**: timeout and user agent
//! - **Per-request config**: query parameters
//! - **Status classification**: non-2xx responses become [`Error::HttpStatus`](crate::Error::HttpStatus)

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
