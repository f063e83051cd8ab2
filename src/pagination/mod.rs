//! Pagination module
//!
//! Search and load-more state machine over the catalog.
//!
//! # Overview
//!
//! [`QueryState`] is the single mutable cursor: search text, offset, page
//! size, known total and the in-flight flag. [`PaginationController`] owns it
//! and maps the three user intents (initial load, search, load more) to one
//! fetch each, producing a [`ViewUpdate`] for the view layer.

mod controller;
mod types;

pub use controller::{PaginationController, ViewUpdate};
pub use types::{QueryState, ResultsSummary};
