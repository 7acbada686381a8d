//! Reference analysis domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Structured features extracted from a competitor page screenshot.
///
/// Every field tolerates absence: when the vision reply cannot be parsed
/// the report degrades to `AnalysisReport::default()` instead of failing
/// the analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Layout pattern description (section placement, spacing, alignment)
    #[serde(default)]
    pub layout_pattern: String,
    /// Named color -> hex code mapping
    #[serde(default)]
    pub color_scheme: HashMap<String, String>,
    /// Ordered section names as they appear on the page
    #[serde(default)]
    pub sections: Vec<String>,
    /// Noteworthy design elements
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Overall tone description
    #[serde(default)]
    pub tone_and_manner: String,
}

/// One record per analyzed competitor URL. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAnalysis {
    /// Unique record identifier (UUID format)
    pub id: String,
    /// The analyzed URL
    pub url: String,
    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
    /// Path of the persisted screenshot
    pub screenshot_path: String,
    /// Extracted features
    pub report: AnalysisReport,
}

impl ReferenceAnalysis {
    pub fn new(
        url: impl Into<String>,
        screenshot_path: impl Into<String>,
        report: AnalysisReport,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
            created_at: Utc::now(),
            screenshot_path: screenshot_path.into(),
            report,
        }
    }
}
