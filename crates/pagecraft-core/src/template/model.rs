//! Template registry domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, categorized detail-page template body.
///
/// The registry is read-mostly: seeded once at startup when empty, then
/// mutated only through explicit create/delete calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique template identifier (UUID format)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category label (fashion, food, electronics, ...)
    pub category: String,
    /// Optional description
    pub description: Option<String>,
    /// The HTML template body
    pub html_template: String,
    /// Whether this template is part of the seeded default set
    pub is_default: bool,
    /// Timestamp when the template was created
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Creates a user-defined template record.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: Option<String>,
        html_template: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            description,
            html_template: html_template.into(),
            is_default: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the template as one of the seeded defaults.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}
