//! OpenAiImageAgent - Direct REST API implementation for the OpenAI Images
//! API.
//!
//! Configuration priority: <config dir>/pagecraft/secret.json > environment
//! variables.

use async_trait::async_trait;
use pagecraft_core::agent::ImageGenerator;
use pagecraft_core::error::{PagecraftError, Result};
use pagecraft_infrastructure::storage::SecretStorage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
const BASE_URL: &str = "https://api.openai.com/v1/images/generations";

/// Image-generation capability that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiImageAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiImageAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads configuration from secret.json or environment variables.
    ///
    /// Priority:
    /// 1. `<config dir>/pagecraft/secret.json` (openai section)
    /// 2. Environment variables (OPENAI_API_KEY, OPENAI_IMAGE_MODEL)
    ///
    /// Model name defaults to `dall-e-3` if not specified.
    pub fn try_from_env() -> Result<Self> {
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(secret_config) = storage.load() {
                if let Some(openai_config) = secret_config.openai {
                    let model = openai_config
                        .model_name
                        .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.into());
                    return Ok(Self::new(openai_config.api_key, model));
                }
            }
        }

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            PagecraftError::config(
                "OPENAI_API_KEY not found in secret.json or environment variables",
            )
        })?;

        let model = env::var("OPENAI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    async fn send_request(&self, body: &CreateImageRequest) -> Result<String> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| {
                PagecraftError::upstream(format!("OpenAI API request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: CreateImageResponse = response.json().await.map_err(|err| {
            PagecraftError::upstream(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_image_url(parsed)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageAgent {
    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let request = CreateImageRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            n: 1,
        };

        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct CreateImageRequest {
    model: String,
    prompt: String,
    size: String,
    quality: String,
    n: u8,
}

#[derive(Deserialize)]
struct CreateImageResponse {
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn extract_image_url(response: CreateImageResponse) -> Result<String> {
    response
        .data
        .into_iter()
        .next()
        .and_then(|image| image.url)
        .ok_or_else(|| PagecraftError::upstream("OpenAI API returned no image URL"))
}

fn map_http_error(status: StatusCode, body: String) -> PagecraftError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    PagecraftError::upstream(format!("OpenAI API error ({}): {}", status.as_u16(), message))
}
