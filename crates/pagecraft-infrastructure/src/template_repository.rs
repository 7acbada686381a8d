//! JsonDirStorage-based TemplateRepository implementation.

use crate::storage::JsonDirStorage;
use async_trait::async_trait;
use pagecraft_core::error::Result;
use pagecraft_core::template::{Template, TemplateRepository};
use std::path::Path;

/// File-per-template repository over a JSON directory.
pub struct JsonDirTemplateRepository {
    storage: JsonDirStorage,
}

impl JsonDirTemplateRepository {
    /// Creates a repository rooted at the given templates directory.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            storage: JsonDirStorage::new(dir).await?,
        })
    }
}

#[async_trait]
impl TemplateRepository for JsonDirTemplateRepository {
    async fn find_by_id(&self, template_id: &str) -> Result<Option<Template>> {
        self.storage.load(template_id).await
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Template>> {
        let mut templates: Vec<Template> = self.storage.load_all().await?;
        if let Some(category) = category {
            templates.retain(|t| t.category == category);
        }
        templates.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(templates)
    }

    async fn save(&self, template: &Template) -> Result<()> {
        self.storage.save(&template.id, template).await
    }

    async fn delete(&self, template_id: &str) -> Result<()> {
        self.storage.delete(template_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(name: &str, category: &str) -> Template {
        Template::new(
            name,
            category,
            None,
            "<html><body>{{ product_name }}</body></html>",
        )
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirTemplateRepository::new(temp_dir.path()).await.unwrap();

        repository.save(&sample("기본 템플릿", "other")).await.unwrap();
        repository.save(&sample("식품 템플릿", "food")).await.unwrap();

        assert_eq!(repository.list(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirTemplateRepository::new(temp_dir.path()).await.unwrap();

        repository.save(&sample("기본 템플릿", "other")).await.unwrap();
        repository.save(&sample("식품 템플릿", "food")).await.unwrap();

        let food = repository.list(Some("food")).await.unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].name, "식품 템플릿");

        assert!(repository.list(Some("fashion")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirTemplateRepository::new(temp_dir.path()).await.unwrap();

        let template = sample("기본 템플릿", "other");
        repository.save(&template).await.unwrap();
        repository.delete(&template.id).await.unwrap();

        assert!(repository.find_by_id(&template.id).await.unwrap().is_none());
    }
}
