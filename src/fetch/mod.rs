//! Catalog fetch module
//!
//! One call, one HTTP GET against the catalog search endpoint.
//!
//! # Overview
//!
//! [`ResultFetcher`] turns a [`QueryState`](crate::pagination::QueryState)
//! into request parameters, performs the request through the injected
//! [`HttpClient`](crate::http::HttpClient) and hands back the raw field bags
//! plus the server-reported hit count. Every failure is caught here and
//! returned as a [`FetchError`] value.

mod fetcher;
mod types;

pub use fetcher::ResultFetcher;
pub use types::{CatalogEntry, CatalogResponse, FetchError, FetchPage, FetchResult};
