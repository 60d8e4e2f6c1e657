use crate::error::{Result, SetlistError};
use crate::models::ErrorBody;
use serde::de::DeserializeOwned;

/// Pull the `error` field out of a failed response body. Bodies that are not
/// JSON, or JSON without the field, yield `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
}

/// Decode a successful response body. An empty body decodes as JSON `null`,
/// so callers expecting "nothing" can ask for `Option<T>` or `Value`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let trimmed = trim_ascii(body);
    if trimmed.is_empty() {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_slice(trimmed)?)
}

/// Turn a non-2xx status and its body into an API error.
pub fn api_error(status: u16, body: &str) -> SetlistError {
    SetlistError::Api {
        status,
        message: extract_error_message(body),
    }
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
