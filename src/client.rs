use crate::errors::HrChatError;
use crate::http::chat;
use crate::http::common::{BASE_URL_ENV_VAR, DEFAULT_TOOL_TYPE, normalize_base_url};
use crate::http::gateway::{RequestOptions, execute, parse_header};
use crate::{
    ChatRequest, ChatResponse, ChatSession, DocumentUploadRequest, DocumentUploadResponse,
};
use reqwest::Client as ReqwestClient;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the HR assistant chat backend.
///
/// Holds the base URL, default headers and a pooled HTTP client. It has no
/// mutable state: build it once, clone it freely, and call it from as many
/// tasks as needed.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) base_url: String,
    #[allow(clippy::struct_field_names)]
    pub(crate) http_client: ReqwestClient,
    pub(crate) default_headers: HeaderMap,
    pub(crate) encode_query_params: bool,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use hr_chat_client::Client;
/// use std::time::Duration;
///
/// let client = Client::builder("http://localhost:8000")
///     .timeout(Duration::from_secs(120))
///     .connect_timeout(Duration::from_secs(10))
///     .default_header("X-Tenant", "acme")
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "http://localhost:8000");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
    encode_query_params: bool,
}

impl ClientBuilder {
    /// Sets the total request timeout.
    ///
    /// Chat generation on the backend can be slow; leave generous headroom.
    /// If not set, uses reqwest's default (no timeout).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// If not set, uses reqwest's default.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Applied after `Content-Type: application/json`, so passing
    /// `Content-Type` here replaces it. Headers given per call through
    /// [`RequestOptions::with_header`] win over these.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Percent-encodes query parameter values.
    ///
    /// Off by default: identifiers are concatenated into the query string
    /// as-is and must already be URL-safe.
    #[must_use]
    pub const fn encode_query_params(mut self, encode: bool) -> Self {
        self.encode_query_params = encode;
        self
    }

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`HrChatError::InvalidInput`] if a default header is not valid
    /// HTTP, or [`HrChatError::ClientBuild`] if the HTTP client cannot be
    /// initialized.
    pub fn build(self) -> Result<Client, HrChatError> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let (name, value) = parse_header(name, value)?;
            default_headers.insert(name, value);
        }

        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| HrChatError::ClientBuild(e.to_string()))?;

        Ok(Client {
            base_url: normalize_base_url(&self.base_url),
            http_client,
            default_headers,
            encode_query_params: self.encode_query_params,
        })
    }
}

impl Client {
    /// Creates a new builder for `Client` instances.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Backend root, e.g. `http://localhost:8000`. Endpoint
    ///   paths such as `/hr/chat/message` are appended to it.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            connect_timeout: None,
            default_headers: Vec::new(),
            encode_query_params: false,
        }
    }

    /// Creates a client with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`HrChatError::ClientBuild`] if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HrChatError> {
        Self::builder(base_url).build()
    }

    /// Creates a client whose base URL comes from `HR_CHAT_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`HrChatError::Config`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, HrChatError> {
        let base_url = std::env::var(BASE_URL_ENV_VAR).unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(HrChatError::Config(format!(
                "{BASE_URL_ENV_VAR} is not set"
            )));
        }
        Self::new(base_url.trim())
    }

    /// The normalized base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request to an arbitrary path under the base URL and decodes
    /// the JSON response as `T`.
    ///
    /// All of the typed operations go through the same path. Use this for
    /// backend endpoints the client does not wrap.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A per-call header is not valid HTTP
    /// - The HTTP request fails
    /// - The backend returns a non-success status ([`HrChatError::Api`])
    /// - The response body is not JSON of shape `T`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_chat_client::{Client, Method, RequestOptions};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("http://localhost:8000")?;
    /// let health: serde_json::Value = client
    ///     .request("/health", RequestOptions::new(Method::GET))
    ///     .await?;
    /// println!("{health}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, HrChatError> {
        let url = format!("{}{}", self.base_url, endpoint);
        execute(&self.http_client, &self.default_headers, &url, options).await
    }

    /// Uploads a text document into a session.
    ///
    /// The request is sent as the JSON body unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The backend returns a non-success status
    /// - Response parsing fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_chat_client::{Client, DocumentUploadRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("http://localhost:8000")?;
    /// let session = client.create_session(None, Some("u123")).await?;
    ///
    /// let upload = DocumentUploadRequest::new(
    ///     &session.session_id,
    ///     "cv.txt",
    ///     "Ten years of backend experience...",
    ///     "cv",
    /// );
    /// let response = client.upload_document_text(&upload).await?;
    /// println!("{} chunks", response.chunks_created);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_document_text(
        &self,
        request: &DocumentUploadRequest,
    ) -> Result<DocumentUploadResponse, HrChatError> {
        debug!(
            "Uploading document: session={}, filename={}, type={}, {} bytes",
            request.session_id,
            request.filename,
            request.document_type,
            request.content.len()
        );

        let response = chat::upload_document_text(self, request).await?;

        debug!(
            "Document uploaded: ID={}, chunks={}",
            response.document_id, response.chunks_created
        );

        Ok(response)
    }

    /// Sends a chat message and returns the generated reply.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The backend returns a non-success status
    /// - Response parsing fails
    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, HrChatError> {
        debug!(
            "Sending message: session={}, tool_type={}",
            request.session_id, request.tool_type
        );

        let response = chat::send_message(self, request).await?;

        debug!(
            "Message answered: ID={}, context snippets={}",
            response.message_id,
            response.context_used.len()
        );

        Ok(response)
    }

    /// Creates a chat session.
    ///
    /// # Arguments
    ///
    /// * `tool_type` - Assistant tool for the session; `cv_analysis` when `None`.
    /// * `user_id` - Owner of the session; left off the request when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The backend returns a non-success status
    /// - Response parsing fails
    pub async fn create_session(
        &self,
        tool_type: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<ChatSession, HrChatError> {
        let tool_type = tool_type.unwrap_or(DEFAULT_TOOL_TYPE);
        debug!("Creating session: tool_type={tool_type}, user_id={user_id:?}");

        let session = chat::create_session(self, tool_type, user_id).await?;

        debug!("Session created: ID={}", session.session_id);

        Ok(session)
    }

    /// Lists the documents attached to a session.
    ///
    /// The response shape is owned by the backend and returned untyped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The backend returns a non-success status
    /// - The body is not JSON
    pub async fn get_session_documents(&self, session_id: &str) -> Result<Value, HrChatError> {
        debug!("Listing documents: session={session_id}");

        chat::get_session_documents(self, session_id).await
    }

    /// Deletes a document from a session.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The backend returns a non-success status
    /// - The body is not JSON
    pub async fn delete_document(
        &self,
        session_id: &str,
        document_id: &str,
    ) -> Result<Value, HrChatError> {
        debug!("Deleting document: session={session_id}, document={document_id}");

        let response = chat::delete_document(self, session_id, document_id).await?;

        debug!("Document deleted successfully");

        Ok(response)
    }

    /// Removes a session and everything attached to it on the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The backend returns a non-success status
    /// - The body is not JSON
    pub async fn cleanup_session(
        &self,
        session_id: &str,
        user_id: Option<&str>,
    ) -> Result<Value, HrChatError> {
        debug!("Cleaning up session: session={session_id}, user_id={user_id:?}");

        let response = chat::cleanup_session(self, session_id, user_id).await?;

        debug!("Session cleaned up");

        Ok(response)
    }
}
