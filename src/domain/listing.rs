use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for text fields the provider did not return.
pub const NOT_AVAILABLE: &str = "Not Available";
/// Placeholder for URL fields the provider did not return.
pub const NOT_APPLICABLE: &str = "N/A";

/// A single shopping listing for a fragrance product.
///
/// Every field is always present; missing provider data is substituted with
/// [`NOT_AVAILABLE`] or [`NOT_APPLICABLE`] so consumers never deal with
/// optional fields. The `id` is minted once, when the listing is collected,
/// and is never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub price: String,
    pub link: String,
    pub source: String,
    pub rating: String,
    pub reviews: String,
    pub thumbnail: String,
}

impl ListingRecord {
    /// Coerces an arbitrary JSON value into a listing.
    ///
    /// Chat-model output is untrusted: fields may be missing, null, or come
    /// back as numbers instead of text. Strings are taken verbatim, numbers
    /// and booleans are stringified, and everything else falls back to the
    /// field's sentinel.
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: text_field(value, "id", ""),
            title: text_field(value, "title", ""),
            price: text_field(value, "price", NOT_AVAILABLE),
            link: text_field(value, "link", NOT_APPLICABLE),
            source: text_field(value, "source", NOT_AVAILABLE),
            rating: text_field(value, "rating", NOT_AVAILABLE),
            reviews: text_field(value, "reviews", NOT_AVAILABLE),
            thumbnail: text_field(value, "thumbnail", NOT_APPLICABLE),
        }
    }
}

fn text_field(value: &Value, key: &str, fallback: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => fallback.to_string(),
    }
}
