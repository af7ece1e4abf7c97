//! # hr-chat-client
//!
//! An async client for the HR assistant chat backend: upload documents into
//! a session, chat against them, and manage the session lifecycle.
//!
//! The client is a thin gateway. Chunking, retrieval and generation all
//! happen on the backend; this crate shapes requests, sends them with
//! `Content-Type: application/json`, and turns non-2xx responses into
//! [`HrChatError::Api`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use hr_chat_client::{ChatRequest, Client, DocumentUploadRequest};
//!
//! # async fn example() -> Result<(), hr_chat_client::HrChatError> {
//! let client = Client::from_env()?; // HR_CHAT_API_URL
//!
//! let session = client.create_session(Some("cv_analysis"), Some("u123")).await?;
//!
//! client
//!     .upload_document_text(&DocumentUploadRequest::new(
//!         &session.session_id,
//!         "cv.txt",
//!         "Ten years of backend experience...",
//!         "cv",
//!     ))
//!     .await?;
//!
//! let reply = client
//!     .send_message(&ChatRequest {
//!         session_id: session.session_id.clone(),
//!         message: "Summarize this candidate".to_string(),
//!         tool_type: "cv_analysis".to_string(),
//!         role_level: "senior".to_string(),
//!         job_type: "backend".to_string(),
//!         language: "en".to_string(),
//!     })
//!     .await?;
//! println!("{}", reply.content);
//!
//! client.cleanup_session(&session.session_id, Some("u123")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Query parameters
//!
//! Identifiers are placed in query strings verbatim unless the client is
//! built with [`ClientBuilder::encode_query_params`]. Set it if session,
//! document or user ids may contain characters such as `&`, `=` or spaces.
//!
//! ## Debugging
//!
//! Set `LOUD_WIRE=1` to echo every request and response to stderr. The crate
//! also emits `tracing` events at `debug` and `trace` level.

mod chat;
mod client;
mod documents;
mod errors;
mod http;
mod session;
mod types;

pub use chat::{ChatRequest, ChatResponse, ChatResponseMetadata};
pub use client::{Client, ClientBuilder};
pub use documents::{DocumentReference, DocumentUploadRequest, DocumentUploadResponse};
pub use errors::HrChatError;
pub use http::common::{
    BASE_URL_ENV_VAR, DEFAULT_TOOL_TYPE, Endpoint, JSON_CONTENT_TYPE, construct_endpoint_url,
};
pub use http::gateway::RequestOptions;
pub use reqwest::Method;
pub use session::ChatSession;
pub use types::Metadata;
