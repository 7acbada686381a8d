//! JsonDirStorage-based HistoryRepository implementation.

use crate::storage::JsonDirStorage;
use async_trait::async_trait;
use pagecraft_core::error::Result;
use pagecraft_core::history::{GenerationHistory, HistoryRepository};
use std::path::Path;

/// File-per-record repository for generation history.
pub struct JsonDirHistoryRepository {
    storage: JsonDirStorage,
}

impl JsonDirHistoryRepository {
    /// Creates a repository rooted at the given history directory.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            storage: JsonDirStorage::new(dir).await?,
        })
    }
}

#[async_trait]
impl HistoryRepository for JsonDirHistoryRepository {
    async fn find_by_id(&self, history_id: &str) -> Result<Option<GenerationHistory>> {
        self.storage.load(history_id).await
    }

    async fn save(&self, history: &GenerationHistory) -> Result<()> {
        self.storage.save(&history.id, history).await
    }

    async fn list_all(&self) -> Result<Vec<GenerationHistory>> {
        let mut records: Vec<GenerationHistory> = self.storage.load_all().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::history::OutputFormat;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirHistoryRepository::new(temp_dir.path()).await.unwrap();

        let record = GenerationHistory::new(
            "session-1",
            "테스트상품",
            OutputFormat::Html,
            Some("<html></html>".to_string()),
            None,
        );
        repository.save(&record).await.unwrap();

        let loaded = repository.find_by_id(&record.id).await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_find_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirHistoryRepository::new(temp_dir.path()).await.unwrap();

        assert!(repository.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_most_recent_first() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirHistoryRepository::new(temp_dir.path()).await.unwrap();

        let first =
            GenerationHistory::new("session-1", "상품 A", OutputFormat::Html, None, None);
        let second =
            GenerationHistory::new("session-2", "상품 B", OutputFormat::Both, None, None);
        repository.save(&first).await.unwrap();
        repository.save(&second).await.unwrap();

        let records = repository.list_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].created_at >= records[1].created_at);
    }
}
