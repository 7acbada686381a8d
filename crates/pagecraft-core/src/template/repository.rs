//! Template repository trait.

use super::model::Template;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the shared template registry.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Finds a template by its ID.
    async fn find_by_id(&self, template_id: &str) -> Result<Option<Template>>;

    /// Lists templates, optionally filtered by exact category label.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Template>>;

    /// Saves a template, overwriting any previous record with the same ID.
    async fn save(&self, template: &Template) -> Result<()>;

    /// Deletes a template by ID. Deleting a missing template is not an
    /// error.
    async fn delete(&self, template_id: &str) -> Result<()>;
}
