//! Helpers for integration tests.

use async_trait::async_trait;

use fragrance_scout::chat::{ChatModel, ChatRequest, ChatResult};
use fragrance_scout::domain::listing::ListingRecord;
use fragrance_scout::search::{SearchResult, ShoppingItem, ShoppingSearch};

/// Search provider that serves a canned result list.
pub struct FakeSearch {
    pub items: Vec<ShoppingItem>,
}

#[async_trait]
impl ShoppingSearch for FakeSearch {
    async fn search(&self, _query: &str) -> SearchResult<Vec<ShoppingItem>> {
        Ok(self.items.clone())
    }
}

/// Chat model that replies with a fixed string.
pub struct FakeChat {
    pub reply: String,
}

#[async_trait]
impl ChatModel for FakeChat {
    async fn complete(&self, _request: ChatRequest<'_>) -> ChatResult<String> {
        Ok(self.reply.clone())
    }
}

pub fn item(title: &str) -> ShoppingItem {
    ShoppingItem {
        title: Some(title.to_string()),
        price: Some("$59.99".to_string()),
        link: Some(format!("https://example.com/{}", title.replace(' ', "-"))),
        source: Some("Example Store".to_string()),
        rating: Some(4.5),
        reviews: Some(2130),
        thumbnail: Some("https://example.com/thumb.jpg".to_string()),
    }
}

pub fn listing(id: &str, title: &str) -> ListingRecord {
    ListingRecord {
        id: id.to_string(),
        title: title.to_string(),
        price: "$59.99".to_string(),
        link: "https://example.com/item".to_string(),
        source: "Example Store".to_string(),
        rating: "4.5".to_string(),
        reviews: "2130".to_string(),
        thumbnail: "https://example.com/thumb.jpg".to_string(),
    }
}
