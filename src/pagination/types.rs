//! Pagination types
//!
//! The query cursor and the results counter derived from it.

use serde::Serialize;
use std::fmt;

/// Current search and pagination position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Trimmed free-text search, empty for "all trees"
    pub search_text: String,
    /// Offset of the last requested page, a multiple of `page_size`
    pub offset: u32,
    /// Records per page, fixed for the lifetime of the state
    pub page_size: u32,
    /// Server-reported total of the current search
    pub total_known: u64,
    /// True while a fetch is in flight
    pub loading: bool,
}

impl QueryState {
    /// Create an empty state. A zero page size is bumped to 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            search_text: String::new(),
            offset: 0,
            page_size: page_size.max(1),
            total_known: 0,
            loading: false,
        }
    }

    /// Start a new search from the first page
    pub fn reset_for_search(&mut self, text: &str) {
        self.search_text = text.trim().to_string();
        self.offset = 0;
        self.total_known = 0;
    }

    /// Move to the next page.
    ///
    /// Returns `false` and leaves the offset untouched when the next offset
    /// does not fit in a `u32`.
    pub fn advance(&mut self) -> bool {
        match self.offset.checked_add(self.page_size) {
            Some(next) => {
                self.offset = next;
                true
            }
            None => false,
        }
    }

    /// Number of records shown once the current page is rendered
    pub fn displayed_count(&self) -> u64 {
        let end = u64::from(self.offset) + u64::from(self.page_size);
        end.min(self.total_known)
    }

    /// Check if another page exists beyond the displayed ones
    pub fn has_more(&self) -> bool {
        self.displayed_count() < self.total_known
    }

    /// Results counter for the view
    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            displayed: self.displayed_count(),
            total: self.total_known,
        }
    }
}

/// Displayed/total counter shown next to the results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    /// Records displayed so far
    pub displayed: u64,
    /// Total records matching the search
    pub total: u64,
}

impl ResultsSummary {
    /// Check if the "load more" control should be shown
    pub fn has_more(&self) -> bool {
        self.displayed < self.total
    }
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} arbres sur {}", self.displayed, self.total)
    }
}
