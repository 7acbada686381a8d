//! JsonDirStorage-based AnalysisRepository implementation.

use crate::storage::JsonDirStorage;
use async_trait::async_trait;
use pagecraft_core::analysis::{AnalysisRepository, ReferenceAnalysis};
use pagecraft_core::error::Result;
use std::path::Path;

/// File-per-record repository for reference analyses.
pub struct JsonDirAnalysisRepository {
    storage: JsonDirStorage,
}

impl JsonDirAnalysisRepository {
    /// Creates a repository rooted at the given analyses directory.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            storage: JsonDirStorage::new(dir).await?,
        })
    }
}

#[async_trait]
impl AnalysisRepository for JsonDirAnalysisRepository {
    async fn find_by_id(&self, analysis_id: &str) -> Result<Option<ReferenceAnalysis>> {
        self.storage.load(analysis_id).await
    }

    async fn save(&self, analysis: &ReferenceAnalysis) -> Result<()> {
        self.storage.save(&analysis.id, analysis).await
    }

    async fn list_all(&self) -> Result<Vec<ReferenceAnalysis>> {
        let mut records: Vec<ReferenceAnalysis> = self.storage.load_all().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
