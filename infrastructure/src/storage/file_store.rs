//! JSON-file key-value store
//!
//! Implements the [`KeyValueStore`] port as one JSON object on disk. Every
//! operation reads the whole file; writes replace it.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thinker_application::{KeyValueStore, StoreError};
use tracing::debug;

/// Key-value store backed by a JSON object file.
///
/// A missing file reads as an empty store. Parent directories are created
/// on the first write.
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StoreError::Io(format!("{}: {}", self.path.display(), e))),
        };
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::Corrupt(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StoreError::Corrupt(format!("{}: {}", self.path.display(), e))),
        }
    }

    async fn write_map(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Io(format!("{}: {}", parent.display(), e)))?;
        }
        let contents = serde_json::to_string_pretty(map)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", self.path.display(), e)))?;
        debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.read_map().await?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get("deepseek_api_key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = FileKeyValueStore::new(&path);

        store.set("deepseek_api_key", "sk-abc").await.unwrap();
        store.set("other", "value").await.unwrap();
        assert_eq!(
            store.get("deepseek_api_key").await.unwrap().as_deref(),
            Some("sk-abc")
        );

        store.remove("deepseek_api_key").await.unwrap();
        assert_eq!(store.get("deepseek_api_key").await.unwrap(), None);
        assert_eq!(store.get("other").await.unwrap().as_deref(), Some("value"));

        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "other": "value" }));
    }

    #[tokio::test]
    async fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        let store = FileKeyValueStore::new(&path);

        assert!(matches!(
            store.get("deepseek_api_key").await,
            Err(StoreError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_missing_key_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileKeyValueStore::new(&path);

        store.remove("deepseek_api_key").await.unwrap();
        assert!(!path.exists());
    }
}
