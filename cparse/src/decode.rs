//! Fence stripping and validated JSON decoding of raw model output.

use serde::de::DeserializeOwned;

use crate::ParseError;

/// Upper bound on the diagnostic excerpt carried by parse failures.
const EXCERPT_CHARS: usize = 200;

/// Contract for model payload schemas: deserialize, then confirm the
/// required fields actually arrived non-empty.
pub trait ResponsePayload: DeserializeOwned {
    fn validate(&self) -> Result<(), ParseError>;
}

/// Truncates raw response text to a bounded, char-safe excerpt.
pub fn response_excerpt(raw: &str) -> String {
    raw.trim().chars().take(EXCERPT_CHARS).collect()
}

/// Strips a surrounding fenced code block, optionally tagged `json`.
///
/// ```rust
/// use cparse::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Decodes and validates a structured payload from raw model output.
///
/// Failures at the decode or validation step carry a truncated excerpt of
/// the raw text so the caller can surface what the model actually said.
pub fn parse_payload<T: ResponsePayload>(raw: &str) -> Result<T, ParseError> {
    let body = strip_code_fence(raw);
    let payload: T = serde_json::from_str(body)
        .map_err(|err| ParseError::invalid_json(err.to_string()).with_excerpt(response_excerpt(raw)))?;

    payload
        .validate()
        .map_err(|err| err.with_excerpt(response_excerpt(raw)))?;

    Ok(payload)
}

/// Plain-text analogue of [`parse_payload`]: trims and rejects blank output.
pub fn require_text(raw: &str) -> Result<String, ParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseError::empty_response().with_excerpt(response_excerpt(raw)));
    }

    Ok(text.to_string())
}
