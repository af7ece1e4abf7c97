use serde::{Deserialize, Serialize};

/// Body of `POST /hr/chat/message`.
///
/// The four tags are forwarded verbatim; the backend decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub tool_type: String,
    pub role_level: String,
    pub job_type: String,
    pub language: String,
}

/// Generated reply to a [`ChatRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message_id: String,
    pub content: String,
    /// Context snippets the backend used as evidence, in backend order.
    #[serde(default)]
    pub context_used: Vec<String>,
    pub metadata: ChatResponseMetadata,
}

impl ChatResponse {
    #[must_use]
    pub fn has_context(&self) -> bool {
        !self.context_used.is_empty()
    }
}

/// Classification tags echoed back from the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseMetadata {
    pub tool_type: String,
    pub role_level: String,
    pub job_type: String,
    pub language: String,
}
