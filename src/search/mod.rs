use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod serpapi;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to build search client: {0}")]
    Build(String),
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search provider returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A raw shopping result as the search provider returns it.
///
/// Fields are optional at this layer; `rating` and `reviews` arrive as
/// numbers on the wire. Sentinel substitution happens when the result is
/// turned into a listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShoppingItem {
    pub title: Option<String>,
    pub price: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub thumbnail: Option<String>,
}

/// An abstraction over shopping-search providers.
#[async_trait]
pub trait ShoppingSearch: Send + Sync {
    /// Runs a single search and returns the provider's raw results.
    async fn search(&self, query: &str) -> SearchResult<Vec<ShoppingItem>>;
}

pub(crate) fn build_reqwest_client() -> SearchResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| SearchError::Build(e.to_string()))
}
