//! Error handling utilities for HTTP responses and error context formatting.

use super::loud_wire;
use crate::errors::HrChatError;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Maximum characters of a body to include in decode error messages
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Checks if an HTTP response is successful, returning it if so or an error otherwise.
///
/// # Errors
///
/// Returns [`HrChatError::Api`] carrying the status and the full body text on
/// any non-2xx status.
pub async fn check_response(
    response: Response,
    request_id: usize,
) -> Result<Response, HrChatError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(read_error_with_context(response, request_id).await)
    }
}

/// Reads the error response body and creates an `HrChatError::Api` with context.
///
/// If the body cannot be read, the message describes the read failure.
pub async fn read_error_with_context(response: Response, request_id: usize) -> HrChatError {
    let status = response.status();
    let status_code = status.as_u16();
    let status_text = status.canonical_reason().unwrap_or_default().to_string();

    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error body: {}", e));

    loud_wire::log_response_body(request_id, &body);
    tracing::warn!(
        "Request #{} failed with HTTP {} {}",
        request_id,
        status_code,
        status_text
    );

    HrChatError::Api {
        status_code,
        status_text,
        body,
    }
}

/// Deserializes a success body, naming the expected type on failure.
///
/// # Errors
///
/// Returns [`HrChatError::MalformedResponse`] with a preview of the body if it
/// does not decode into `T`.
pub fn deserialize_with_context<T: DeserializeOwned>(
    body: &str,
    context: &str,
) -> Result<T, HrChatError> {
    serde_json::from_str(body).map_err(|e| {
        HrChatError::MalformedResponse(format!(
            "{context}: {}",
            format_json_parse_error(body, e)
        ))
    })
}

/// Formats JSON parsing context by including a preview of the raw JSON.
pub fn format_json_parse_error(json_str: &str, error: serde_json::Error) -> String {
    let preview = truncate_for_context(json_str, ERROR_BODY_PREVIEW_LENGTH);
    format!("JSON parse error: {} | Context: {}", error, preview)
}

/// Truncates a string to specified length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte UTF-8 characters.
pub fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}
