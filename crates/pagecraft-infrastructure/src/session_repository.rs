//! JsonDirStorage-based SessionRepository implementation.
//!
//! Directory structure:
//! ```text
//! <data dir>/sessions/
//! ├── <session-id-1>.json
//! └── <session-id-2>.json
//! ```

use crate::storage::JsonDirStorage;
use async_trait::async_trait;
use pagecraft_core::error::Result;
use pagecraft_core::session::{Session, SessionRepository};
use std::path::Path;

/// File-per-session repository over a JSON directory.
pub struct JsonDirSessionRepository {
    storage: JsonDirStorage,
}

impl JsonDirSessionRepository {
    /// Creates a repository rooted at the given sessions directory.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            storage: JsonDirStorage::new(dir).await?,
        })
    }
}

#[async_trait]
impl SessionRepository for JsonDirSessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        self.storage.load(session_id).await
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.storage.save(&session.id, session).await
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        self.storage.delete(session_id).await
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        let mut sessions: Vec<Session> = self.storage.load_all().await?;
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sessions)
    }
}
