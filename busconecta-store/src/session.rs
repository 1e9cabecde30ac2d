use async_trait::async_trait;
use busconecta_core::account::SessionStore;
use busconecta_core::kv::{KeyValueStore, KvError, SESSION_KEY};
use std::sync::Arc;

/// The signed-in marker: a single slot under `currentUserEmail`.
pub struct KvSession {
    kv: Arc<dyn KeyValueStore>,
}

impl KvSession {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl SessionStore for KvSession {
    async fn set_current(&self, email: &str) -> Result<(), KvError> {
        self.kv.set(SESSION_KEY, email).await
    }

    async fn current(&self) -> Result<Option<String>, KvError> {
        self.kv.get(SESSION_KEY).await
    }

    async fn clear(&self) -> Result<(), KvError> {
        self.kv.remove(SESSION_KEY).await
    }
}
