//! Request/response DTOs for the HTTP surface.

use chrono::{DateTime, Utc};
use pagecraft_core::catalog::{Category, Mood};
use pagecraft_core::history::OutputFormat;
use pagecraft_core::interview::{InputKind, NextStep, Question};
use pagecraft_core::session::{AnswerValue, ProductContext, Session, SessionStatus};
use pagecraft_core::template::Template;
use pagecraft_core::analysis::ReferenceAnalysis;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// === Interview ===

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub reference_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub status: SessionStatus,
    pub context: ProductContext,
    pub created_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            status: session.status,
            context: session.context,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub field_name: String,
    pub value: AnswerValue,
}

#[derive(Debug, Serialize)]
pub struct AnswerAck {
    pub success: bool,
    pub field_name: String,
}

/// A question to present, or the terminal completion marker
/// (`input_type: "complete"`).
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub input_type: &'static str,
    pub field_name: String,
}

impl From<NextStep> for QuestionResponse {
    fn from(step: NextStep) -> Self {
        match step {
            NextStep::Question(Question {
                question,
                field_name,
                input_kind,
                options,
            }) => Self {
                question,
                options,
                input_type: input_kind_str(input_kind),
                field_name,
            },
            NextStep::Complete => Self {
                question: "모든 정보가 수집되었습니다. 상세페이지를 생성할 준비가 되었습니다!"
                    .to_string(),
                options: None,
                input_type: "complete",
                field_name: "complete".to_string(),
            },
        }
    }
}

fn input_kind_str(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Text => "text",
        InputKind::Select => "select",
        InputKind::MultiSelect => "multiselect",
        InputKind::ImageUpload => "image_upload",
    }
}

// === Generation ===

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub session_id: String,
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub template_id: Option<String>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Both
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub preview_url: String,
}

#[derive(Debug, Deserialize)]
pub struct BackgroundGenerateRequest {
    pub category: Category,
    pub mood: Mood,
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BackgroundGenerateResponse {
    pub image_url: String,
}

// === Templates ===

#[derive(Debug, Deserialize)]
pub struct TemplateListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateCreateRequest {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    pub html_template: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_default: bool,
}

impl From<Template> for TemplateResponse {
    fn from(template: Template) -> Self {
        Self {
            id: template.id,
            name: template.name,
            category: template.category,
            description: template.description,
            is_default: template.is_default,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub success: bool,
}

// === Analysis ===

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub layout_pattern: String,
    pub color_scheme: HashMap<String, String>,
    pub sections: Vec<String>,
    pub highlights: Vec<String>,
    pub tone_and_manner: String,
    pub screenshot_url: String,
}

impl From<ReferenceAnalysis> for AnalysisResponse {
    fn from(analysis: ReferenceAnalysis) -> Self {
        Self {
            layout_pattern: analysis.report.layout_pattern,
            color_scheme: analysis.report.color_scheme,
            sections: analysis.report.sections,
            highlights: analysis.report.highlights,
            tone_and_manner: analysis.report.tone_and_manner,
            screenshot_url: analysis.screenshot_path,
        }
    }
}
