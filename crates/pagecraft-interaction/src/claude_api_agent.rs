//! ClaudeApiAgent - Direct REST API implementation for Claude.
//!
//! This agent calls the Claude REST API directly without CLI dependency.
//! Configuration priority: <config dir>/pagecraft/secret.json > environment
//! variables.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use pagecraft_core::agent::TextGenerator;
use pagecraft_core::error::{PagecraftError, Result};
use pagecraft_infrastructure::storage::SecretStorage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const BASE_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Text/vision capability that talks to the Claude HTTP API.
#[derive(Clone)]
pub struct ClaudeApiAgent {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: 2048,
        }
    }

    /// Loads configuration from secret.json or environment variables.
    ///
    /// Priority:
    /// 1. `<config dir>/pagecraft/secret.json` (claude section)
    /// 2. Environment variables (ANTHROPIC_API_KEY, CLAUDE_MODEL_NAME)
    ///
    /// Model name defaults to `claude-sonnet-4-20250514` if not specified.
    pub fn try_from_env() -> Result<Self> {
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(secret_config) = storage.load() {
                if let Some(claude_config) = secret_config.claude {
                    let model = claude_config
                        .model_name
                        .unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.into());
                    return Ok(Self::new(claude_config.api_key, model));
                }
            }
        }

        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| {
            PagecraftError::config(
                "ANTHROPIC_API_KEY not found in secret.json or environment variables",
            )
        })?;

        let model = env::var("CLAUDE_MODEL_NAME").unwrap_or_else(|_| DEFAULT_CLAUDE_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    async fn send_request(&self, body: &CreateMessageRequest) -> Result<String> {
        let response = self
            .client
            .post(BASE_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| {
                PagecraftError::upstream(format!("Claude API request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Claude error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: CreateMessageResponse = response.json().await.map_err(|err| {
            PagecraftError::upstream(format!("Failed to parse Claude response: {err}"))
        })?;

        extract_text_response(parsed)
    }

    async fn execute(&self, content: Vec<ContentBlock>) -> Result<String> {
        let request = CreateMessageRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content,
            }],
            max_tokens: self.max_tokens,
        };

        self.send_request(&request).await
    }
}

#[async_trait]
impl TextGenerator for ClaudeApiAgent {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.execute(vec![ContentBlock::Text {
            text: prompt.to_string(),
        }])
        .await
    }

    async fn generate_with_image(&self, prompt: &str, image_png: &[u8]) -> Result<String> {
        let content = vec![
            ContentBlock::Image {
                source: ImageSource {
                    r#type: "base64".to_string(),
                    media_type: "image/png".to_string(),
                    data: BASE64_STANDARD.encode(image_png),
                },
            },
            ContentBlock::Text {
                text: prompt.to_string(),
            },
        ];
        self.execute(content).await
    }
}

#[derive(Serialize)]
struct CreateMessageRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: Vec<ContentBlock>,
}

enum ContentBlock {
    Text { text: String },
    Image { source: ImageSource },
}

// Custom serialization for ContentBlock to match Claude API format
impl Serialize for ContentBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;

        match self {
            ContentBlock::Text { text } => {
                map.serialize_entry("type", "text")?;
                map.serialize_entry("text", text)?;
            }
            ContentBlock::Image { source } => {
                map.serialize_entry("type", "image")?;
                map.serialize_entry("source", source)?;
            }
        }

        map.end()
    }
}

#[derive(Serialize)]
struct ImageSource {
    r#type: String,
    media_type: String,
    data: String,
}

#[derive(Deserialize)]
struct CreateMessageResponse {
    content: Vec<ContentBlockResponse>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ContentBlockResponse {
    #[serde(rename = "text")]
    Text { text: String },
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    r#type: String,
    message: String,
}

fn extract_text_response(response: CreateMessageResponse) -> Result<String> {
    response
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlockResponse::Text { text } => Some(text),
        })
        .ok_or_else(|| {
            PagecraftError::upstream("Claude API returned no text in the response content")
        })
}

fn map_http_error(status: StatusCode, body: String) -> PagecraftError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    PagecraftError::upstream(format!("Claude API error ({}): {}", status.as_u16(), message))
}
