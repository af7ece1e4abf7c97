use reqwest::Method;

/// Tool type sent by [`Endpoint::CreateSession`] when the caller does not pick one.
pub const DEFAULT_TOOL_TYPE: &str = "cv_analysis";

/// Environment variable read by [`crate::Client::from_env`].
pub const BASE_URL_ENV_VAR: &str = "HR_CHAT_API_URL";

/// Content type sent on every request unless overridden.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Represents the backend endpoints under `/hr/chat/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// Upload a text document into a session
    UploadDocumentText,
    /// Send a chat message
    SendMessage,
    /// Create a new chat session
    CreateSession {
        tool_type: &'a str,
        user_id: Option<&'a str>,
    },
    /// List the documents attached to a session
    SessionDocuments { session_id: &'a str },
    /// Delete a single document from a session
    DeleteDocument {
        session_id: &'a str,
        document_id: &'a str,
    },
    /// Tear down a session and its documents
    CleanupSession {
        session_id: &'a str,
        user_id: Option<&'a str>,
    },
}

impl<'a> Endpoint<'a> {
    /// HTTP method the backend expects for this endpoint
    pub fn method(&self) -> Method {
        match self {
            Self::UploadDocumentText | Self::SendMessage | Self::CreateSession { .. } => {
                Method::POST
            }
            Self::SessionDocuments { .. } => Method::GET,
            Self::DeleteDocument { .. } | Self::CleanupSession { .. } => Method::DELETE,
        }
    }

    /// Constructs the URL path for this endpoint, without query string
    const fn path(&self) -> &'static str {
        match self {
            Self::UploadDocumentText => "/hr/chat/upload-document-text",
            Self::SendMessage => "/hr/chat/message",
            Self::CreateSession { .. } => "/hr/chat/create-session",
            Self::SessionDocuments { .. } => "/hr/chat/session-documents",
            Self::DeleteDocument { .. } => "/hr/chat/delete-document",
            Self::CleanupSession { .. } => "/hr/chat/cleanup-session",
        }
    }

    /// Returns the query parameters for this endpoint, in wire order.
    ///
    /// Optional parameters are left out entirely when absent.
    fn query_params(&self) -> Vec<(&'static str, &'a str)> {
        match self {
            Self::UploadDocumentText | Self::SendMessage => Vec::new(),
            Self::CreateSession { tool_type, user_id } => {
                let mut params = vec![("tool_type", *tool_type)];
                if let Some(user_id) = user_id {
                    params.push(("user_id", *user_id));
                }
                params
            }
            Self::SessionDocuments { session_id } => vec![("session_id", *session_id)],
            Self::DeleteDocument {
                session_id,
                document_id,
            } => vec![("session_id", *session_id), ("document_id", *document_id)],
            Self::CleanupSession {
                session_id,
                user_id,
            } => {
                let mut params = vec![("session_id", *session_id)];
                if let Some(user_id) = user_id {
                    params.push(("user_id", *user_id));
                }
                params
            }
        }
    }

    /// Path plus query string, ready to append to a base URL.
    ///
    /// With `encode_query` off, values are concatenated verbatim: a value
    /// containing `&`, `=` or `#` will corrupt the query string. Callers that
    /// cannot guarantee URL-safe identifiers should build the client with
    /// `encode_query_params(true)`.
    #[must_use]
    pub fn to_path_and_query(&self, encode_query: bool) -> String {
        let params = self.query_params();
        if params.is_empty() {
            return self.path().to_string();
        }

        let query = params
            .iter()
            .map(|(key, value)| {
                if encode_query {
                    format!("{key}={}", urlencoding::encode(value))
                } else {
                    format!("{key}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{query}", self.path())
    }
}

/// Constructs the full URL for an endpoint.
#[must_use]
pub fn construct_endpoint_url(base_url: &str, endpoint: &Endpoint, encode_query: bool) -> String {
    format!("{base_url}{}", endpoint.to_path_and_query(encode_query))
}

/// Drops one trailing `/` so paths starting with `/` join cleanly.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}
