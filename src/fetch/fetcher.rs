//! Result fetcher implementation

use super::types::{CatalogResponse, FetchPage, FetchResult};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::QueryState;
use tracing::{debug, warn};

/// Query parameter carrying the dataset identifier
pub const DATASET_PARAM: &str = "dataset";
/// Query parameter carrying the page size
pub const ROWS_PARAM: &str = "rows";
/// Query parameter carrying the offset
pub const START_PARAM: &str = "start";
/// Query parameter carrying the free-text search
pub const QUERY_PARAM: &str = "q";

/// Issues catalog search requests for a [`QueryState`]
#[derive(Debug, Clone)]
pub struct ResultFetcher {
    client: HttpClient,
    config: CatalogConfig,
}

impl ResultFetcher {
    /// Create a fetcher around an existing client
    pub fn new(client: HttpClient, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    /// Create a fetcher with a client built from the catalog config
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(HttpClientConfig::from(&config))?;
        Ok(Self::new(client, config))
    }

    /// Get the catalog config
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Query parameters for the page described by `state`
    pub fn request_config(&self, state: &QueryState) -> RequestConfig {
        let mut request = RequestConfig::new()
            .query(DATASET_PARAM, &self.config.dataset)
            .query(ROWS_PARAM, state.page_size.to_string())
            .query(START_PARAM, state.offset.to_string());

        let text = state.search_text.trim();
        if !text.is_empty() {
            request = request.query(QUERY_PARAM, text);
        }

        request
    }

    /// Fetch the page described by `state`.
    ///
    /// Returns an empty page without touching the network when another fetch
    /// holds `state.loading`. On success `state.total_known` takes the
    /// server-reported hit count.
    pub async fn fetch(&self, state: &mut QueryState) -> FetchResult {
        if state.loading {
            debug!("Fetch already in flight, dropping request");
            return Ok(FetchPage::default());
        }

        let request = self.request_config(state);
        let _loading = LoadingGuard::acquire(&mut state.loading);

        debug!(
            "Fetching start={} rows={} q={:?}",
            state.offset, state.page_size, state.search_text
        );

        let response: CatalogResponse = match self
            .client
            .get_json_with_config(&self.config.endpoint, request)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Catalog fetch failed: {e}");
                return Err(e.into());
            }
        };

        let page = FetchPage::from(response);
        state.total_known = page.total_hits;

        debug!(
            "Fetched {} records of {} total",
            page.len(),
            page.total_hits
        );
        Ok(page)
    }
}

/// Holds the loading flag for the lifetime of one fetch.
///
/// Cleared on drop, so an early return or a cancelled future never leaves the
/// flag set.
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
