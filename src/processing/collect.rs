use uuid::Uuid;

use crate::domain::listing::{ListingRecord, NOT_APPLICABLE, NOT_AVAILABLE};
use crate::search::{SearchResult, ShoppingItem, ShoppingSearch};

/// Fixed term appended to every search query to steer the provider towards
/// fragrance listings.
const SEARCH_SUFFIX: &str = "fragrance";

/// Keyword-overlap relevance test.
///
/// The query is split into lowercase whitespace-separated keywords; a title
/// is relevant when at least half of them appear in it as substrings.
pub fn is_relevant(title: &str, query: &str) -> bool {
    let title = title.to_lowercase();
    let keywords: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if keywords.is_empty() {
        return false;
    }

    let matches = keywords
        .iter()
        .filter(|word| title.contains(word.as_str()))
        .count();

    matches as f64 >= keywords.len() as f64 / 2.0
}

fn item_to_listing(item: ShoppingItem) -> ListingRecord {
    ListingRecord {
        id: Uuid::new_v4().to_string(),
        title: item.title.unwrap_or_default(),
        price: item.price.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        link: item.link.unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        source: item.source.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        rating: item
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        reviews: item
            .reviews
            .map(|r| r.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        thumbnail: item.thumbnail.unwrap_or_else(|| NOT_APPLICABLE.to_string()),
    }
}

/// Runs one shopping search for `query` and keeps the relevant results.
///
/// The "fragrance" suffix is part of the query for both the search request
/// and the relevance filter. Survivors keep the provider's order and each
/// gets a freshly minted id. Transport errors propagate; there are no
/// retries.
pub async fn collect<S>(search: &S, query: &str) -> SearchResult<Vec<ListingRecord>>
where
    S: ShoppingSearch + ?Sized,
{
    let query = format!("{query} {SEARCH_SUFFIX}");

    let items = search.search(&query).await?;
    log::info!("Search returned {} raw results for '{query}'", items.len());

    let listings: Vec<ListingRecord> = items
        .into_iter()
        .filter(|item| is_relevant(item.title.as_deref().unwrap_or_default(), &query))
        .map(item_to_listing)
        .collect();
    log::info!("{} results passed the relevance filter", listings.len());

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_match_is_relevant() {
        assert!(is_relevant(
            "Dior Sauvage Eau de Toilette",
            "Dior Sauvage Eau de Toilette"
        ));
    }

    #[test]
    fn half_of_four_keywords_is_relevant() {
        // 2 of 4 keywords match: exactly half.
        assert!(is_relevant("Dior Sauvage gift set", "Dior Sauvage Eau Fresh"));
    }

    #[test]
    fn two_of_five_keywords_is_not_relevant() {
        assert!(!is_relevant(
            "Dior Sauvage gift set",
            "Dior Sauvage Eau de Toilette"
        ));
    }

    #[test]
    fn three_of_five_keywords_is_relevant() {
        assert!(is_relevant(
            "Dior Sauvage Eau gift set",
            "Dior Sauvage Eau de Toilette"
        ));
    }

    #[test]
    fn empty_query_is_never_relevant() {
        assert!(!is_relevant("Dior Sauvage", ""));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_relevant("DIOR SAUVAGE EAU DE TOILETTE", "dior sauvage"));
    }

    #[test]
    fn maps_missing_fields_to_sentinels() {
        let item = ShoppingItem {
            title: Some("Polo Blue Eau de Toilette".to_string()),
            ..Default::default()
        };

        let listing = item_to_listing(item);
        assert!(!listing.id.is_empty());
        assert_eq!(listing.price, NOT_AVAILABLE);
        assert_eq!(listing.link, NOT_APPLICABLE);
        assert_eq!(listing.source, NOT_AVAILABLE);
        assert_eq!(listing.rating, NOT_AVAILABLE);
        assert_eq!(listing.reviews, NOT_AVAILABLE);
        assert_eq!(listing.thumbnail, NOT_APPLICABLE);
    }

    #[test]
    fn stringifies_numeric_rating_and_reviews() {
        let item = ShoppingItem {
            title: Some("Polo Blue".to_string()),
            rating: Some(4.5),
            reviews: Some(2130),
            ..Default::default()
        };

        let listing = item_to_listing(item);
        assert_eq!(listing.rating, "4.5");
        assert_eq!(listing.reviews, "2130");
    }
}
