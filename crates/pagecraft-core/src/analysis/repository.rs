//! Reference analysis repository trait.

use super::model::ReferenceAnalysis;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for reference analysis records.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Finds an analysis record by its ID.
    async fn find_by_id(&self, analysis_id: &str) -> Result<Option<ReferenceAnalysis>>;

    /// Persists a new analysis record.
    async fn save(&self, analysis: &ReferenceAnalysis) -> Result<()>;

    /// Lists all analysis records, most recent first.
    async fn list_all(&self) -> Result<Vec<ReferenceAnalysis>>;
}
