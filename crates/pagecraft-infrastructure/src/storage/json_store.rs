//! Directory-backed JSON storage with atomic writes.
//!
//! One entity per file (`<id>.json`). Writes go through a temporary file
//! followed by a rename, so readers never observe a half-written record.

use pagecraft_core::error::{PagecraftError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A handle to one storage directory.
pub struct JsonDirStorage {
    dir: PathBuf,
}

impl JsonDirStorage {
    /// Opens (and creates if needed) the storage directory.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Returns the storage directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Serializes and writes one record atomically.
    pub async fn save<T: Serialize>(&self, id: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        let tmp = self.dir.join(format!(".{id}.json.tmp"));
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, self.path_for(id)).await?;
        Ok(())
    }

    /// Loads one record, `None` when the file does not exist.
    pub async fn load<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>> {
        match fs::read_to_string(self.path_for(id)).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads every record in the directory.
    ///
    /// Records that fail to parse are skipped with a warning so one corrupt
    /// file cannot take down a listing.
    pub async fn load_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut records = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            match serde_json::from_str::<T>(&content) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping unreadable record {}: {}", path.display(), e);
                }
            }
        }

        Ok(records)
    }

    /// Removes one record. Missing files are not an error.
    pub async fn delete(&self, id: &str) -> Result<()> {
        match fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PagecraftError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        value: i64,
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonDirStorage::new(temp_dir.path()).await.unwrap();

        let record = Record {
            id: "r1".to_string(),
            value: 42,
        };
        storage.save("r1", &record).await.unwrap();

        let loaded: Option<Record> = storage.load("r1").await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonDirStorage::new(temp_dir.path()).await.unwrap();

        let loaded: Option<Record> = storage.load("missing").await.unwrap();
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn test_load_all_skips_corrupt_files() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonDirStorage::new(temp_dir.path()).await.unwrap();

        storage
            .save(
                "good",
                &Record {
                    id: "good".to_string(),
                    value: 1,
                },
            )
            .await
            .unwrap();
        tokio::fs::write(temp_dir.path().join("bad.json"), "{ broken")
            .await
            .unwrap();

        let records: Vec<Record> = storage.load_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "good");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonDirStorage::new(temp_dir.path()).await.unwrap();

        storage
            .save(
                "r1",
                &Record {
                    id: "r1".to_string(),
                    value: 7,
                },
            )
            .await
            .unwrap();

        storage.delete("r1").await.unwrap();
        storage.delete("r1").await.unwrap();

        let loaded: Option<Record> = storage.load("r1").await.unwrap();
        assert_eq!(loaded, None);
    }
}
