//! Reading and writing listing files, and the file-name conventions that
//! connect the two pipeline stages.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::domain::listing::ListingRecord;

const REFINED_SUFFIX: &str = "_filtered";

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/*?:"<>|]"#).expect("invalid file name pattern"));

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("listing file is not a JSON array of listings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Removes characters that are invalid in file names and trims whitespace.
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "").trim().to_string()
}

/// Default output file for a collected query: `<sanitized query>.json`.
pub fn collection_file_name(query: &str) -> PathBuf {
    PathBuf::from(format!("{}.json", sanitize_file_name(query)))
}

/// Output file for a refined input: `<stem>_filtered.json` next to the input.
pub fn refined_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{REFINED_SUFFIX}.json"))
}

/// Derives the match description from a collection file name by stripping
/// the `.json` suffix.
pub fn query_from_file_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Loads a listing file written by [`save_listings`].
pub fn load_listings(path: &Path) -> Result<Vec<ListingRecord>, StorageError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Writes listings as a pretty-printed JSON array with a 4-space indent.
///
/// The file is overwritten whole, without an atomic rename; a crash
/// mid-write can leave a truncated file.
pub fn save_listings(path: &Path, listings: &[ListingRecord]) -> Result<(), StorageError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    listings.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}
