//! Generation history repository trait.

use super::model::GenerationHistory;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for generation history records.
///
/// Records are write-once: there is no update operation.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Finds a history record by its ID.
    async fn find_by_id(&self, history_id: &str) -> Result<Option<GenerationHistory>>;

    /// Persists a new history record.
    async fn save(&self, history: &GenerationHistory) -> Result<()>;

    /// Lists all history records, most recent first.
    async fn list_all(&self) -> Result<Vec<GenerationHistory>>;
}
