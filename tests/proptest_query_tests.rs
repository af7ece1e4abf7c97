//! Property-based tests for endpoint URL construction.

use hr_chat_client::{DEFAULT_TOOL_TYPE, Endpoint, construct_endpoint_url};
use proptest::prelude::*;

/// Identifiers that are already safe to place in a query string.
fn url_safe_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.~-]{1,32}"
}

/// Arbitrary text, including characters that need escaping.
fn any_text() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

proptest! {
    #[test]
    fn create_session_query_is_literal(
        tool_type in url_safe_id(),
        user_id in proptest::option::of(url_safe_id()),
    ) {
        let endpoint = Endpoint::CreateSession {
            tool_type: &tool_type,
            user_id: user_id.as_deref(),
        };
        let url = construct_endpoint_url("http://backend", &endpoint, false);

        let expected = match &user_id {
            Some(user_id) => format!(
                "http://backend/hr/chat/create-session?tool_type={tool_type}&user_id={user_id}"
            ),
            None => format!("http://backend/hr/chat/create-session?tool_type={tool_type}"),
        };
        prop_assert_eq!(url, expected);
    }

    #[test]
    fn encoding_is_noop_for_safe_ids(session_id in url_safe_id(), document_id in url_safe_id()) {
        let endpoint = Endpoint::DeleteDocument {
            session_id: &session_id,
            document_id: &document_id,
        };
        prop_assert_eq!(endpoint.to_path_and_query(true), endpoint.to_path_and_query(false));
    }

    #[test]
    fn encoded_values_survive_query_parsing(session_id in any_text(), user_id in any_text()) {
        let endpoint = Endpoint::CleanupSession {
            session_id: &session_id,
            user_id: Some(user_id.as_str()),
        };
        let path_and_query = endpoint.to_path_and_query(true);
        let query = path_and_query
            .split_once('?')
            .map(|(_, q)| q)
            .unwrap_or_default();

        let pairs: Vec<(String, String)> = query
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (k.to_string(), urlencoding::decode(v).unwrap().into_owned())
            })
            .collect();

        prop_assert_eq!(
            pairs,
            vec![
                ("session_id".to_string(), session_id.clone()),
                ("user_id".to_string(), user_id.clone()),
            ]
        );
    }
}

#[test]
fn default_tool_type_is_cv_analysis() {
    assert_eq!(DEFAULT_TOOL_TYPE, "cv_analysis");
}
