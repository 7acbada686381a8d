//! Generation history domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which artifacts a generation call should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Html,
    Image,
    Both,
}

impl OutputFormat {
    /// True when the rendered HTML is part of the requested output.
    pub fn wants_html(self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Both)
    }

    /// True when a rasterized image is part of the requested output.
    pub fn wants_image(self) -> bool {
        matches!(self, OutputFormat::Image | OutputFormat::Both)
    }
}

/// One record per successful generation request. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationHistory {
    /// Unique record identifier (UUID format)
    pub id: String,
    /// Owning session reference
    pub session_id: String,
    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
    /// Product name, denormalized from the session context
    pub product_name: String,
    /// Requested output kind
    pub output_format: OutputFormat,
    /// Rendered HTML, stored for html/both requests
    pub html_content: Option<String>,
    /// Path of the rasterized image, when one was produced
    pub image_path: Option<String>,
}

impl GenerationHistory {
    pub fn new(
        session_id: impl Into<String>,
        product_name: impl Into<String>,
        output_format: OutputFormat,
        html_content: Option<String>,
        image_path: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            created_at: Utc::now(),
            product_name: product_name.into(),
            output_format,
            html_content,
            image_path,
        }
    }
}
