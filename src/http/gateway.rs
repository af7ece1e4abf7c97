use super::common::JSON_CONTENT_TYPE;
use super::error_helpers::{check_response, deserialize_with_context};
use super::loud_wire;
use crate::errors::HrChatError;
use reqwest::Client as ReqwestClient;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Per-call options for [`crate::Client::request`].
///
/// Defaults to a `GET` with no body and no extra headers.
///
/// # Example
///
/// ```
/// use hr_chat_client::{Method, RequestOptions};
///
/// let options = RequestOptions::new(Method::POST)
///     .with_body(r#"{"ping":true}"#)
///     .with_header("X-Trace-Id", "abc123");
/// assert_eq!(options.method(), &Method::POST);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Method,
    body: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Sets a pre-serialized request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` as JSON and sets it as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`HrChatError::Json`] if the value cannot be serialized.
    pub fn with_json_body<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, HrChatError> {
        let json = serde_json::to_string(body)?;
        Ok(self.with_body(json))
    }

    /// Adds a header for this call only. Replaces any default with the same name,
    /// including `Content-Type`.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Parses a header name/value pair supplied as text.
pub(crate) fn parse_header(
    name: &str,
    value: &str,
) -> Result<(HeaderName, HeaderValue), HrChatError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| HrChatError::InvalidInput(format!("invalid header name '{name}': {e}")))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| {
        HrChatError::InvalidInput(format!("invalid value for header '{name}': {e}"))
    })?;
    Ok((header_name, header_value))
}

/// Layers request headers: JSON content type, then client defaults, then
/// per-call headers. Later layers replace earlier values of the same name.
pub(crate) fn merge_headers(
    defaults: &HeaderMap,
    overrides: &[(String, String)],
) -> Result<HeaderMap, HrChatError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    for (name, value) in defaults {
        headers.insert(name.clone(), value.clone());
    }

    for (name, value) in overrides {
        let (name, value) = parse_header(name, value)?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Issues one call and decodes the success body as `T`.
///
/// No retries and no timeout of its own; both come from how the
/// `reqwest::Client` was built.
///
/// # Errors
///
/// Returns an error if:
/// - A per-call header is not valid HTTP
/// - The HTTP request fails
/// - The response status is not successful
/// - The response cannot be parsed as `T`
pub(crate) async fn execute<T: DeserializeOwned>(
    http_client: &ReqwestClient,
    default_headers: &HeaderMap,
    url: &str,
    options: RequestOptions,
) -> Result<T, HrChatError> {
    let RequestOptions {
        method,
        body,
        headers,
    } = options;
    let headers = merge_headers(default_headers, &headers)?;

    let request_id = loud_wire::next_request_id();
    loud_wire::log_request(request_id, method.as_str(), url, body.as_deref());
    debug!("Request #{}: {} {}", request_id, method, url);
    if let Some(body) = &body {
        trace!("Request #{} body: {}", request_id, body);
    }

    let mut builder = http_client.request(method, url).headers(headers);
    if let Some(body) = body {
        builder = builder.body(body);
    }

    let response = builder.send().await?;

    loud_wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response, request_id).await?;
    let response_text = response.text().await.map_err(HrChatError::Http)?;

    loud_wire::log_response_body(request_id, &response_text);

    deserialize_with_context(&response_text, std::any::type_name::<T>())
}
