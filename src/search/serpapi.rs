use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::search::{ShoppingItem, ShoppingSearch, build_reqwest_client};
use crate::search::{SearchError, SearchResult};

const SEARCH_ENDPOINT: &str = "https://serpapi.com/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    shopping_results: Option<Vec<ShoppingItem>>,
}

/// Shopping search backed by SerpApi's `google_shopping` engine.
pub struct SerpApiSearch {
    api_key: String,
    base_url: Url,
    client: reqwest::Client,
}

impl SerpApiSearch {
    pub fn new(api_key: impl Into<String>) -> SearchResult<Self> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: Url::parse(SEARCH_ENDPOINT)
                .map_err(|e| SearchError::Build(e.to_string()))?,
            client: build_reqwest_client()?,
        })
    }
}

#[async_trait]
impl ShoppingSearch for SerpApiSearch {
    /// Issues one `google_shopping` search with fixed en/us locale
    /// parameters. A response without a `shopping_results` field is an
    /// empty result set, not an error.
    async fn search(&self, query: &str) -> SearchResult<Vec<ShoppingItem>> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("engine", "google_shopping")
            .append_pair("q", query)
            .append_pair("hl", "en")
            .append_pair("gl", "us")
            .append_pair("direct_link", "true")
            .append_pair("api_key", &self.api_key);

        let res = self.client.get(url.as_str()).send().await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(SearchError::Api { status, body });
        }

        let parsed: SearchResponse = res.json().await?;
        Ok(parsed.shopping_results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_results_field_is_empty_set() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.shopping_results.is_none());
    }

    #[test]
    fn deserializes_numeric_rating_and_reviews() {
        let body = r#"{"shopping_results": [
            {"title": "Polo Blue", "price": "$59.99", "rating": 4.5, "reviews": 2130}
        ]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let items = parsed.shopping_results.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rating, Some(4.5));
        assert_eq!(items[0].reviews, Some(2130));
        assert_eq!(items[0].link, None);
    }
}
