//! Capability seams for external collaborators.
//!
//! The generative AI endpoints and the headless browser are injected into
//! the use cases as trait objects, never reached through module-global
//! clients, so tests can substitute canned implementations.

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// A generative text endpoint, optionally vision-capable.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends a single-turn prompt and returns the model's text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Sends a prompt together with a PNG image and returns the text reply.
    async fn generate_with_image(&self, prompt: &str, image_png: &[u8]) -> Result<String>;
}

/// A generative image endpoint.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates one image for the prompt and returns its hosted URL.
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}

/// Headless-browser page capture.
#[async_trait]
pub trait PageCapture: Send + Sync {
    /// Loads a URL in a fixed-width viewport and returns a full-page PNG.
    async fn capture_url(&self, url: &str) -> Result<Vec<u8>>;

    /// Renders an HTML document in a fixed-width viewport, sized to its
    /// content height, and writes a full-page PNG to `output`.
    async fn render_to_file(&self, html: &str, output: &Path) -> Result<()>;
}
