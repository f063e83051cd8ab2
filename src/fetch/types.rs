//! Fetch types
//!
//! Wire shape of the catalog response and the fetcher's result values.

use crate::error::Error;
use crate::types::RawRecord;
use crate::types::JsonValue;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

// ============================================================================
// Wire format
// ============================================================================

/// Body of a catalog search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    /// Total number of matching records, 0 when missing or not a count
    #[serde(default, deserialize_with = "lenient_count")]
    pub nhits: u64,
    /// Records of the requested page
    #[serde(default)]
    pub records: Option<Vec<CatalogEntry>>,
}

/// One entry of the `records` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    /// The tree's field bag
    #[serde(default)]
    pub fields: Option<RawRecord>,
}

/// Accept any JSON number as a hit count. Fractions are truncated; null,
/// negatives and non-numbers count as 0.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    let count = match value {
        Some(JsonValue::Number(n)) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map_or(0, |f| f as u64)
        }),
        _ => 0,
    };
    Ok(count)
}

impl From<CatalogResponse> for FetchPage {
    fn from(response: CatalogResponse) -> Self {
        let records = response
            .records
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.fields.unwrap_or_default())
            .collect();

        Self {
            records,
            total_hits: response.nhits,
        }
    }
}

// ============================================================================
// Fetch results
// ============================================================================

/// One page of raw records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchPage {
    /// Raw field bags, in server order
    pub records: Vec<RawRecord>,
    /// Server-reported total match count
    pub total_hits: u64,
}

impl FetchPage {
    /// Check if the page has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the page
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// A fetch that did not produce a page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("Erreur HTTP {status}")]
    HttpStatus { status: u16 },

    /// Transport failure or unreadable body
    #[error("{message}")]
    Network { message: String },
}

impl FetchError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// HTTP status, for status errors
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status } => Some(*status),
            FetchError::Network { .. } => None,
        }
    }

    /// User-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<Error> for FetchError {
    fn from(err: Error) -> Self {
        match err {
            Error::HttpStatus { status, .. } => FetchError::HttpStatus { status },
            other => FetchError::network(other.to_string()),
        }
    }
}

/// Outcome of one fetch
pub type FetchResult = std::result::Result<FetchPage, FetchError>;
