//! Wire calls for the `/hr/chat/` endpoints.
//!
//! Each function shapes one request (endpoint, method, optional JSON body)
//! and hands it to the gateway. Logging of what was asked and what came back
//! lives in [`crate::Client`].

use super::common::{Endpoint, construct_endpoint_url};
use super::gateway::{RequestOptions, execute};
use crate::errors::HrChatError;
use crate::{
    ChatRequest, ChatResponse, ChatSession, Client, DocumentUploadRequest,
    DocumentUploadResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

async fn call<T: DeserializeOwned>(
    client: &Client,
    endpoint: Endpoint<'_>,
    body: Option<&(impl Serialize + ?Sized)>,
) -> Result<T, HrChatError> {
    let url = construct_endpoint_url(&client.base_url, &endpoint, client.encode_query_params);
    let mut options = RequestOptions::new(endpoint.method());
    if let Some(body) = body {
        options = options.with_json_body(body)?;
    }
    execute(&client.http_client, &client.default_headers, &url, options).await
}

pub(crate) async fn upload_document_text(
    client: &Client,
    request: &DocumentUploadRequest,
) -> Result<DocumentUploadResponse, HrChatError> {
    call(client, Endpoint::UploadDocumentText, Some(request)).await
}

pub(crate) async fn send_message(
    client: &Client,
    request: &ChatRequest,
) -> Result<ChatResponse, HrChatError> {
    call(client, Endpoint::SendMessage, Some(request)).await
}

pub(crate) async fn create_session(
    client: &Client,
    tool_type: &str,
    user_id: Option<&str>,
) -> Result<ChatSession, HrChatError> {
    call(
        client,
        Endpoint::CreateSession { tool_type, user_id },
        None::<&()>,
    )
    .await
}

pub(crate) async fn get_session_documents(
    client: &Client,
    session_id: &str,
) -> Result<Value, HrChatError> {
    call(client, Endpoint::SessionDocuments { session_id }, None::<&()>).await
}

pub(crate) async fn delete_document(
    client: &Client,
    session_id: &str,
    document_id: &str,
) -> Result<Value, HrChatError> {
    call(
        client,
        Endpoint::DeleteDocument {
            session_id,
            document_id,
        },
        None::<&()>,
    )
    .await
}

pub(crate) async fn cleanup_session(
    client: &Client,
    session_id: &str,
    user_id: Option<&str>,
) -> Result<Value, HrChatError> {
    call(
        client,
        Endpoint::CleanupSession {
            session_id,
            user_id,
        },
        None::<&()>,
    )
    .await
}
