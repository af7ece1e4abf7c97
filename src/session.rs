//! Chat session state as reported by the backend.

use crate::types::Metadata;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-tracked conversation context.
///
/// Timestamps are kept as the backend sent them. Use
/// [`ChatSession::created_at_utc`] and [`ChatSession::updated_at_utc`] for
/// parsed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub tool_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Identifiers of documents attached to the session, in upload order.
    #[serde(default)]
    pub document_ids: Vec<String>,
    #[serde(default)]
    pub message_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Metadata>,
}

impl ChatSession {
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    #[must_use]
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }

    #[must_use]
    pub fn has_documents(&self) -> bool {
        !self.document_ids.is_empty()
    }
}

/// Parses RFC 3339 text, or a zone-less ISO timestamp taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_minimal_session_deserialization() {
        let session: ChatSession = serde_json::from_value(json!({
            "session_id": "s1",
            "tool_type": "cv_analysis"
        }))
        .unwrap();

        assert_eq!(session.session_id, "s1");
        assert!(session.user_id.is_none());
        assert!(session.document_ids.is_empty());
        assert_eq!(session.message_count, 0);
        assert!(!session.has_documents());
        assert!(session.created_at_utc().is_none());
    }

    #[test]
    fn test_full_session_deserialization() {
        let session: ChatSession = serde_json::from_value(json!({
            "session_id": "s2",
            "user_id": "u123",
            "tool_type": "technical_interview",
            "created_at": "2024-03-01T09:30:00Z",
            "updated_at": "2024-03-01T10:00:00.123456",
            "document_ids": ["doc-1", "doc-2"],
            "message_count": 4,
            "settings": {"difficulty": "hard", "max_questions": 10}
        }))
        .unwrap();

        assert_eq!(session.user_id.as_deref(), Some("u123"));
        assert_eq!(session.document_ids, vec!["doc-1", "doc-2"]);
        assert_eq!(session.message_count, 4);
        assert!(session.has_documents());

        let settings = session.settings.as_ref().unwrap();
        assert_eq!(settings["difficulty"], "hard");
        assert_eq!(settings["max_questions"], 10);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-03-01T11:30:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.day(), 1);
    }

    #[test]
    fn test_parse_naive_timestamp_as_utc() {
        let parsed = parse_timestamp("2024-03-01T10:00:00.123456").unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.year(), 2024);

        let no_fraction = parse_timestamp("2024-03-01T10:00:00").unwrap();
        assert_eq!(no_fraction.minute(), 0);
    }

    #[test]
    fn test_unparseable_timestamp_keeps_raw_text() {
        let session: ChatSession = serde_json::from_value(json!({
            "session_id": "s3",
            "tool_type": "cv_analysis",
            "created_at": "yesterday"
        }))
        .unwrap();

        assert!(session.created_at_utc().is_none());
        assert_eq!(session.created_at.as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_serialization_skips_absent_optionals() {
        let session = ChatSession {
            session_id: "s4".to_string(),
            user_id: None,
            tool_type: "cv_analysis".to_string(),
            created_at: None,
            updated_at: None,
            document_ids: Vec::new(),
            message_count: 0,
            settings: None,
        };

        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({
                "session_id": "s4",
                "tool_type": "cv_analysis",
                "document_ids": [],
                "message_count": 0
            })
        );
    }
}
