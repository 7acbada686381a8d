//! Session domain model.
//!
//! A session represents one guided interview run: the answers collected so
//! far and where the flow stands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Lifecycle status of an interview session.
///
/// A session starts `InProgress` and becomes `Completed` when the fixed
/// question flow is exhausted and the adaptive generator yields no further
/// question. Completed sessions are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// A single collected answer.
///
/// Answers are tagged by shape rather than stored as free-form JSON, so the
/// rendering and rasterization paths cannot confuse a text field with an
/// image list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    /// Free text or a single selected choice.
    Text(String),
    /// Multiple selected choices.
    List(Vec<String>),
    /// References to uploaded product images.
    Images(Vec<String>),
}

impl AnswerValue {
    /// Returns the text content if this is a `Text` answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained items for `List` and `Images` answers.
    pub fn as_items(&self) -> Option<&[String]> {
        match self {
            AnswerValue::List(items) | AnswerValue::Images(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

/// Accumulated interview answers, keyed by field name.
///
/// Keys are unique and insertion order is irrelevant. Field names proposed by
/// the adaptive generator are stored alongside the fixed ones.
pub type ProductContext = HashMap<String, AnswerValue>;

/// Represents one interview run in the application's domain layer.
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    /// Timestamp when the session was last updated
    pub updated_at: DateTime<Utc>,
    /// Current lifecycle status
    pub status: SessionStatus,
    /// Collected answers, keyed by field name
    #[serde(default)]
    pub context: ProductContext,
}

impl Session {
    /// Creates a new in-progress session, optionally seeded with a
    /// reference URL answer.
    pub fn new(reference_url: Option<String>) -> Self {
        let mut context = ProductContext::new();
        if let Some(url) = reference_url {
            context.insert("reference_url".to_string(), AnswerValue::Text(url));
        }

        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            status: SessionStatus::InProgress,
            context,
        }
    }

    /// Returns true once the interview has finished.
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Merges one answer into the context, last write wins.
    ///
    /// The stored map is replaced with a fresh copy so persistence layers
    /// observe the update as a whole-value change.
    pub fn record_answer(&mut self, field_name: impl Into<String>, value: AnswerValue) {
        let mut context = self.context.clone();
        context.insert(field_name.into(), value);
        self.context = context;
        self.updated_at = Utc::now();
    }

    /// Convenience accessor for a text answer, empty string when absent.
    pub fn text_field(&self, field_name: &str) -> &str {
        self.context
            .get(field_name)
            .and_then(AnswerValue::as_text)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_in_progress() {
        let session = Session::new(None);
        assert_eq!(session.status, SessionStatus::InProgress);
        assert!(session.context.is_empty());
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_new_session_seeds_reference_url() {
        let session = Session::new(Some("https://example.com/item".to_string()));
        assert_eq!(
            session.text_field("reference_url"),
            "https://example.com/item"
        );
    }

    #[test]
    fn test_record_answer_last_write_wins() {
        let mut session = Session::new(None);
        session.record_answer("product_name", AnswerValue::from("노트북 파우치"));
        session.record_answer("product_name", AnswerValue::from("프리미엄 노트북 파우치"));

        assert_eq!(session.context.len(), 1);
        assert_eq!(session.text_field("product_name"), "프리미엄 노트북 파우치");
    }

    #[test]
    fn test_answer_value_serde_tagging() {
        let value = AnswerValue::Images(vec!["a.png".to_string()]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"kind":"images","value":["a.png"]}"#);

        let parsed: AnswerValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
