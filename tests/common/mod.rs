//! Common test utilities shared across all integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! Every test runs against its own `wiremock::MockServer`, so tests never
//! touch a real backend and can run in parallel.

use hr_chat_client::{ChatRequest, Client, DocumentUploadRequest, Metadata};
use serde_json::{Value, json};
use wiremock::{MockServer, Request};

/// Starts a mock backend and a client pointed at it.
pub async fn mock_backend() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(server.uri()).expect("client should build");
    (server, client)
}

/// Returns the only request the mock server received.
///
/// # Panics
///
/// Panics if the server received zero or several requests.
#[allow(dead_code)]
pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    assert_eq!(
        requests.len(),
        1,
        "expected exactly one request, got {}",
        requests.len()
    );
    requests.remove(0)
}

/// Query parameters of a recorded request, in wire order.
#[allow(dead_code)]
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// The `Content-Type` a recorded request was sent with.
#[allow(dead_code)]
pub fn content_type(request: &Request) -> Option<String> {
    request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

// =============================================================================
// Fixtures
// =============================================================================

#[allow(dead_code)]
pub fn sample_upload_request() -> DocumentUploadRequest {
    let mut metadata = Metadata::new();
    metadata.insert("source".to_string(), json!("careers-page"));
    metadata.insert("tags".to_string(), json!(["rust", "backend"]));

    DocumentUploadRequest::new(
        "session-1",
        "jane_doe_cv.txt",
        "Jane Doe\nSenior Backend Engineer\n8 years of Rust and distributed systems.",
        "cv",
    )
    .with_metadata(metadata)
}

#[allow(dead_code)]
pub fn sample_upload_response() -> Value {
    json!({
        "document_id": "doc-123",
        "filename": "jane_doe_cv.txt",
        "chunks_created": 3,
        "success": true,
        "message": "Document uploaded and processed"
    })
}

#[allow(dead_code)]
pub fn sample_chat_request() -> ChatRequest {
    ChatRequest {
        session_id: "session-1".to_string(),
        message: "What are the candidate's strongest skills?".to_string(),
        tool_type: "cv_analysis".to_string(),
        role_level: "senior".to_string(),
        job_type: "backend".to_string(),
        language: "en".to_string(),
    }
}

#[allow(dead_code)]
pub fn sample_chat_response() -> Value {
    json!({
        "message_id": "msg-42",
        "content": "The candidate is strongest in Rust and distributed systems.",
        "context_used": [
            "8 years of Rust and distributed systems.",
            "Senior Backend Engineer"
        ],
        "metadata": {
            "tool_type": "cv_analysis",
            "role_level": "senior",
            "job_type": "backend",
            "language": "en"
        }
    })
}

#[allow(dead_code)]
pub fn sample_session(tool_type: &str, user_id: Option<&str>) -> Value {
    let mut session = json!({
        "session_id": "session-1",
        "tool_type": tool_type,
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z",
        "document_ids": [],
        "message_count": 0,
        "settings": {"max_context_chunks": 5}
    });
    if let Some(user_id) = user_id {
        session["user_id"] = json!(user_id);
    }
    session
}

#[allow(dead_code)]
pub fn sample_session_documents() -> Value {
    json!({
        "session_id": "session-1",
        "documents": [
            {"document_id": "doc-123", "filename": "jane_doe_cv.txt", "document_type": "cv"},
            {"document_id": "doc-456", "filename": "role.txt", "document_type": "job_description"}
        ],
        "total": 2
    })
}
