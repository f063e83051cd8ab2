//! Catalog configuration
//!
//! All parameters are compile-time constants. [`CatalogConfig`] bundles them so
//! a caller (the CLI, or a test pointing at a mock server) can override the
//! endpoint or page size without touching the constants.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

// ============================================================================
// Constants
// ============================================================================

/// Catalog search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://opendata.paris.fr/api/records/1.0/search/";

/// Dataset identifier of the notable trees catalog
pub const DEFAULT_DATASET: &str = "arbresremarquablesparis";

/// Number of records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// CatalogConfig
// ============================================================================

/// Where and how to query the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Search endpoint URL
    pub endpoint: String,
    /// Value of the `dataset` query parameter
    pub dataset: String,
    /// Records per page (`rows` query parameter)
    pub page_size: u32,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("arbres-remarquables/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CatalogConfig {
    /// Create a new config builder
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Check that the config can drive a controller
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value(
                "page_size",
                "must be greater than zero",
            ));
        }

        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.dataset.trim().is_empty() {
            return Err(Error::invalid_value("dataset", "must not be empty"));
        }

        Ok(())
    }
}

/// Builder for [`CatalogConfig`]
#[derive(Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    /// Set the endpoint URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the dataset identifier
    pub fn dataset(mut self, dataset: impl Into<String>) -> Self {
        self.config.dataset = dataset.into();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<CatalogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
