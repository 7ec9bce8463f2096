use thiserror::Error;

use crate::chat::{ChatError, ChatModel, ChatRequest};
use crate::domain::listing::ListingRecord;

const SYSTEM_PROMPT: &str =
    "You are an assistant that filters JSON arrays of product listings by \
     product similarity and size criteria.";

const MAX_COMPLETION_TOKENS: u32 = 2048;

/// The model reply could not be read back as a JSON array.
///
/// Carries the unmodified reply so callers can surface it for manual
/// inspection.
#[derive(Debug, Error)]
#[error("completion was not a JSON array: {source}")]
pub struct ParseError {
    pub raw: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("failed to encode listings payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Parse(ParseError),
}

/// Builds the user prompt asking the model to narrow `listings_json` down to
/// products that match `description`.
fn filter_prompt(listings_json: &str, description: &str) -> String {
    format!(
        "You are given a JSON array of fragrance product listings. Each listing has \
         the fields 'id', 'title', 'price', 'link', 'source', 'rating', 'reviews' \
         and 'thumbnail'. Keep only the listings that represent the same fragrance \
         product as the description '{description}' in terms of brand, fragrance \
         name and type. Different packaging or spray wording for the same scent \
         counts as a match: for a description of Dior Sauvage Eau de Toilette, \
         'Sauvage by Christian Dior Eau de Toilette Spray 3.4 oz' is a valid match. \
         Additionally, keep only listings with a size of 3.4 oz / 100 ml or near it.\n\n\
         Return the kept listings as a valid JSON array with no additional text or \
         explanations, so the reply can be parsed directly.\n\n\
         JSON Data:\n{listings_json}"
    )
}

/// Strips a surrounding markdown code fence from a model reply.
fn strip_code_fences(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Parses a model reply into listings.
///
/// This is the trust boundary for chat output: the reply is de-fenced,
/// parsed as a JSON array, and each element is coerced into the listing
/// shape. Nothing past this function ever sees unparsed model text.
pub fn parse_completion(response: &str) -> Result<Vec<ListingRecord>, ParseError> {
    let cleaned = strip_code_fences(response);
    let values: Vec<serde_json::Value> =
        serde_json::from_str(cleaned).map_err(|source| ParseError {
            raw: response.to_string(),
            source,
        })?;

    Ok(values.iter().map(ListingRecord::from_value).collect())
}

/// Asks the chat model to narrow `listings` down to products matching
/// `description` on brand, fragrance name, type and size.
///
/// Sends exactly one completion request with deterministic decoding. The
/// model only ever drops listings; survivors are returned as the model
/// echoed them, ids included. An unreadable reply is a
/// [`RefineError::Parse`] carrying the raw text.
pub async fn refine<C>(
    chat: &C,
    listings: &[ListingRecord],
    description: &str,
) -> Result<Vec<ListingRecord>, RefineError>
where
    C: ChatModel + ?Sized,
{
    let payload = serde_json::to_string(listings)?;
    let prompt = filter_prompt(&payload, description);

    let response = chat
        .complete(ChatRequest {
            system: SYSTEM_PROMPT,
            user: &prompt,
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: 0.0,
        })
        .await?;

    parse_completion(&response).map_err(RefineError::Parse)
}

/// [`refine`] with the fail-open policy applied: an unreadable reply is
/// logged in full and treated as an empty result instead of an error.
///
/// An empty result therefore means "no matches or could not refine" — use
/// [`refine`] directly when the distinction matters. Transport errors still
/// propagate.
pub async fn refine_or_empty<C>(
    chat: &C,
    listings: &[ListingRecord],
    description: &str,
) -> Result<Vec<ListingRecord>, RefineError>
where
    C: ChatModel + ?Sized,
{
    match refine(chat, listings, description).await {
        Err(RefineError::Parse(err)) => {
            log::error!("Failed to parse completion as JSON: {}", err.source);
            log::error!("Raw completion:\n{}", err.raw);
            Ok(Vec::new())
        }
        other => other,
    }
}
