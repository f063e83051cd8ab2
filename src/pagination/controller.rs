//! Pagination controller
//!
//! Orchestrates fetcher, formatter and query state for the three user intents.

use super::types::{QueryState, ResultsSummary};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::fetch::{FetchError, FetchPage, ResultFetcher};
use crate::format::{FormattedRecord, RecordFormatter};
use tracing::{debug, info, warn};

/// What the view should do after a controller call
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// Clear the list and show these cards
    Replace {
        /// Formatted cards
        records: Vec<FormattedRecord>,
        /// Results counter
        summary: ResultsSummary,
    },
    /// Add these cards below the existing ones
    Append {
        /// Formatted cards
        records: Vec<FormattedRecord>,
        /// Results counter
        summary: ResultsSummary,
    },
    /// A fresh search matched nothing
    NoResults {
        /// Results counter
        summary: ResultsSummary,
    },
    /// The fetch failed; nothing to render
    Failed {
        /// Failure reported by the fetcher
        error: FetchError,
    },
    /// Dropped because another fetch was in flight
    Skipped,
}

impl ViewUpdate {
    /// Cards carried by this update, empty for non-rendering updates
    pub fn records(&self) -> &[FormattedRecord] {
        match self {
            ViewUpdate::Replace { records, .. } | ViewUpdate::Append { records, .. } => records,
            _ => &[],
        }
    }

    /// Results counter, when the fetch succeeded
    pub fn summary(&self) -> Option<ResultsSummary> {
        match self {
            ViewUpdate::Replace { summary, .. }
            | ViewUpdate::Append { summary, .. }
            | ViewUpdate::NoResults { summary } => Some(*summary),
            _ => None,
        }
    }

    /// Fetch error, for failed updates
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ViewUpdate::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Check if this update reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, ViewUpdate::Failed { .. })
    }

    /// Check if this is the "no results" signal
    pub fn is_no_results(&self) -> bool {
        matches!(self, ViewUpdate::NoResults { .. })
    }

    /// Check if the update was dropped
    pub fn is_skipped(&self) -> bool {
        matches!(self, ViewUpdate::Skipped)
    }

    /// Check if the view must clear its list before rendering this update
    pub fn clears_list(&self) -> bool {
        matches!(
            self,
            ViewUpdate::Replace { .. } | ViewUpdate::NoResults { .. }
        )
    }
}

/// Search and load-more controller over one [`QueryState`]
#[derive(Debug)]
pub struct PaginationController {
    fetcher: ResultFetcher,
    formatter: RecordFormatter,
    state: QueryState,
}

impl PaginationController {
    /// Create a controller around a fetcher
    pub fn new(fetcher: ResultFetcher) -> Self {
        let state = QueryState::new(fetcher.config().page_size);
        Self {
            fetcher,
            formatter: RecordFormatter::new(),
            state,
        }
    }

    /// Create a controller with its own HTTP client
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        Ok(Self::new(ResultFetcher::from_config(config)?))
    }

    /// Current query state
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut QueryState {
        &mut self.state
    }

    /// Current results counter
    pub fn summary(&self) -> ResultsSummary {
        self.state.summary()
    }

    /// Check if a "load more" would return new records
    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    /// Load the first page of the unfiltered catalog
    pub async fn initial_load(&mut self) -> ViewUpdate {
        info!("Loading catalog");
        self.fetch_first_page("").await
    }

    /// Start a new search for `text` (trimmed) from the first page
    pub async fn search(&mut self, text: &str) -> ViewUpdate {
        info!("Searching for {:?}", text.trim());
        self.fetch_first_page(text).await
    }

    /// Fetch the next page of the current search and append it
    pub async fn load_more(&mut self) -> ViewUpdate {
        if self.state.loading {
            debug!("Load more ignored, fetch in flight");
            return ViewUpdate::Skipped;
        }

        if !self.state.advance() {
            warn!("Load more ignored, offset would overflow");
            return ViewUpdate::Skipped;
        }
        debug!("Loading more from offset {}", self.state.offset);

        match self.fetcher.fetch(&mut self.state).await {
            Ok(page) => ViewUpdate::Append {
                records: self.format_page(&page),
                summary: self.state.summary(),
            },
            Err(error) => self.failed(error),
        }
    }

    async fn fetch_first_page(&mut self, text: &str) -> ViewUpdate {
        if self.state.loading {
            debug!("Search ignored, fetch in flight");
            return ViewUpdate::Skipped;
        }

        self.state.reset_for_search(text);

        match self.fetcher.fetch(&mut self.state).await {
            Ok(page) if page.is_empty() => {
                info!("No trees found");
                ViewUpdate::NoResults {
                    summary: self.state.summary(),
                }
            }
            Ok(page) => {
                let summary = self.state.summary();
                info!("Showing {summary}");
                ViewUpdate::Replace {
                    records: self.format_page(&page),
                    summary,
                }
            }
            Err(error) => self.failed(error),
        }
    }

    fn format_page(&self, page: &FetchPage) -> Vec<FormattedRecord> {
        self.formatter.format_all(&page.records)
    }

    fn failed(&self, error: FetchError) -> ViewUpdate {
        warn!("Fetch failed: {error}");
        ViewUpdate::Failed { error }
    }
}
