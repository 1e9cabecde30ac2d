use async_trait::async_trait;

/// Key holding the serialized user directory.
pub const USERS_KEY: &str = "users";
/// Key holding the signed-in user's e-mail, absent when logged out.
pub const SESSION_KEY: &str = "currentUserEmail";
/// Key holding the serialized reservation ledger.
pub const RESERVATIONS_KEY: &str = "reservas";

#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("key-value backend I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("key-value backend encoding failure: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// The on-device storage collaborator: a persistent, process-wide,
/// string-keyed map. Durability and atomicity live entirely behind this
/// trait; callers layer no transactions on top of it.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    async fn remove(&self, key: &str) -> Result<(), KvError>;
}
