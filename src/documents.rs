//! Document upload types.
//!
//! Documents are plain text attached to a session. The backend splits them
//! into chunks for retrieval; this client only sees the chunk count.

use crate::types::Metadata;
use serde::{Deserialize, Serialize};

/// Body of `POST /hr/chat/upload-document-text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUploadRequest {
    pub session_id: String,
    pub filename: String,
    /// Full document text.
    pub content: String,
    /// Backend tag describing the document, e.g. `"cv"` or `"job_description"`.
    pub document_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl DocumentUploadRequest {
    #[must_use]
    pub fn new(
        session_id: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
        document_type: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            filename: filename.into(),
            content: content.into(),
            document_type: document_type.into(),
            metadata: None,
        }
    }

    /// Attaches free-form metadata, replacing any already set.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Result of a document upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUploadResponse {
    /// Server-assigned document identifier
    pub document_id: String,
    pub filename: String,
    /// Number of retrieval chunks the backend produced
    pub chunks_created: u32,
    pub success: bool,
    pub message: String,
}

/// Provenance of a retrieved chunk.
///
/// The backend uses this to describe where chat context came from. None of
/// the client operations return it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReference {
    pub document_id: String,
    pub chunk_id: String,
    pub relevance_score: f64,
    pub content_snippet: String,
}
