use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::kv::KvError;

/// A registered account. Passwords are stored and compared verbatim; the
/// persisted layout carries them in the clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("a user with this e-mail already exists")]
    DuplicateEmail,

    #[error("e-mail or password incorrect")]
    InvalidCredentials,

    #[error("directory storage failure: {0}")]
    Storage(#[from] KvError),
}

/// Repository trait for the user directory.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a new account. E-mail uniqueness is case-insensitive on the
    /// trimmed address; the stored e-mail is trimmed and lowercased.
    async fn register(&self, name: &str, email: &str, password: &str)
        -> Result<User, DirectoryError>;

    /// Credential check: case-insensitive e-mail, exact password.
    async fn login(&self, email: &str, password: &str) -> Result<User, DirectoryError>;

    /// Exact-match lookup, used for the dashboard greeting.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError>;
}

/// The session marker: a single named slot naming the signed-in user.
/// No expiry, no token, no multi-device concept.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn set_current(&self, email: &str) -> Result<(), KvError>;

    async fn current(&self) -> Result<Option<String>, KvError>;

    async fn clear(&self) -> Result<(), KvError>;
}
