use thiserror::Error;

/// Defines errors that can occur when talking to the HR chat backend.
///
/// Every non-2xx response becomes [`HrChatError::Api`]. The gateway does not
/// tell client errors apart from server errors; callers that care can inspect
/// [`HrChatError::status_code`].
///
/// # Example: Handling API Errors
///
/// ```ignore
/// match client.cleanup_session("s1", None).await {
///     Err(HrChatError::Api { status_code: 404, .. }) => {
///         tracing::info!("Session already gone");
///     }
///     Err(HrChatError::Api { status_code, status_text, body }) => {
///         tracing::error!("Backend error {} {}: {}", status_code, status_text, body);
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HrChatError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// The backend answered with a non-success status.
    ///
    /// The body is the raw response text, untruncated.
    #[error("API error (HTTP {status_code} {status_text}): {body}")]
    Api {
        /// HTTP status code (e.g., 400, 404, 500)
        status_code: u16,
        /// Canonical reason phrase for the status (e.g., "Not Found")
        status_text: String,
        /// Raw response body text
        body: String,
    },
    /// The backend returned a success status but the body did not decode into
    /// the expected shape.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    /// Failed to build the HTTP client.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl HrChatError {
    /// Returns the HTTP status code for [`HrChatError::Api`] errors.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HrChatError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns `true` if the backend reported 404 for the request.
    ///
    /// Useful when deleting documents or cleaning up sessions that may
    /// already be gone.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}
