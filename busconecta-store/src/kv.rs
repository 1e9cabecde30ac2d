use async_trait::async_trait;
use busconecta_core::kv::{KeyValueStore, KvError};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::warn;

/// Process-local store; state dies with the process. Used by tests and
/// previews.
#[derive(Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Durable store: one JSON object on disk holding the whole map. Every
/// write rewrites the file; there is no journal and no partial update.
pub struct JsonFileKv {
    path: PathBuf,
}

impl JsonFileKv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<HashMap<String, String>, KvError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(KvError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // An unreadable store file counts as no data, not a failure.
                warn!("store file unreadable, starting empty: {}", e);
                Ok(HashMap::new())
            }
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, serde_json::to_vec(entries)?).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileKv {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.load().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let kv = MemoryKv::new();

        assert_eq!(kv.get("users").await.unwrap(), None);

        kv.set("users", "[]").await.unwrap();
        assert_eq!(kv.get("users").await.unwrap().as_deref(), Some("[]"));

        kv.remove("users").await.unwrap();
        assert_eq!(kv.get("users").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.json");

        {
            let kv = JsonFileKv::new(&path);
            kv.set("currentUserEmail", "ana@x.com").await.unwrap();
        }

        let reopened = JsonFileKv::new(&path);
        assert_eq!(
            reopened.get("currentUserEmail").await.unwrap().as_deref(),
            Some("ana@x.com")
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.json");
        std::fs::write(&path, "{not json").unwrap();

        let kv = JsonFileKv::new(&path);
        assert_eq!(kv.get("users").await.unwrap(), None);

        // The next write replaces the corrupt file.
        kv.set("users", "[]").await.unwrap();
        assert_eq!(kv.get("users").await.unwrap().as_deref(), Some("[]"));
    }
}
