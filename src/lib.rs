// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Arbres Remarquables
//!
//! Browse and search the Paris open-data catalog of notable trees, one page
//! at a time, and render the results as cards.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arbres_remarquables::{CatalogConfig, PaginationController, Result};
//! use arbres_remarquables::render::{TextRenderer, ViewRenderer};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut controller = PaginationController::from_config(CatalogConfig::default())?;
//!     let renderer = TextRenderer::new();
//!
//!     println!("{}", renderer.render(&controller.search("platane").await));
//!     while controller.has_more() {
//!         println!("{}", renderer.render(&controller.load_more().await));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! user intent ──► PaginationController ──► ResultFetcher ──► HttpClient ──► catalog
//!                      │   (QueryState)          │
//!                      │                         ▼
//!                      │                   raw field bags
//!                      ▼                         │
//!                 ViewUpdate ◄── RecordFormatter ┘
//!                      │
//!                      ▼
//!                 ViewRenderer (text / json / html)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Catalog endpoint and page size
pub mod config;

/// HTTP client
pub mod http;

/// Catalog fetcher
pub mod fetch;

/// Record formatting
pub mod format;

/// Query state and pagination controller
pub mod pagination;

/// Output renderers
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use fetch::{FetchError, FetchPage, FetchResult, ResultFetcher};
pub use format::{FormattedRecord, RecordFormatter};
pub use pagination::{PaginationController, QueryState, ResultsSummary, ViewUpdate};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
