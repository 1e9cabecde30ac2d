use async_trait::async_trait;
use busconecta_core::account::{DirectoryError, User, UserStore};
use busconecta_core::kv::{KeyValueStore, KvError, USERS_KEY};
use std::sync::Arc;
use tracing::{info, warn};

/// User directory over the key-value collaborator. The whole directory is
/// one JSON array under the `users` key.
pub struct KvUserDirectory {
    kv: Arc<dyn KeyValueStore>,
}

impl KvUserDirectory {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    async fn load(&self) -> Result<Vec<User>, KvError> {
        let Some(raw) = self.kv.get(USERS_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(users) => Ok(users),
            Err(e) => {
                // A corrupt directory reads as empty rather than failing the screen.
                warn!("user directory unreadable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, users: &[User]) -> Result<(), KvError> {
        self.kv
            .set(USERS_KEY, &serde_json::to_string(users)?)
            .await
    }
}

fn normalized(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserStore for KvUserDirectory {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DirectoryError> {
        let mut users = self.load().await?;

        let wanted = normalized(email);
        if users.iter().any(|u| normalized(&u.email) == wanted) {
            return Err(DirectoryError::DuplicateEmail);
        }

        let user = User {
            name: name.trim().to_string(),
            email: wanted,
            password: password.to_string(),
        };
        users.push(user.clone());
        self.persist(&users).await?;

        info!("account registered for {}", user.email);
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, DirectoryError> {
        let users = self.load().await?;
        let wanted = normalized(email);

        users
            .into_iter()
            .find(|u| normalized(&u.email) == wanted && u.password == password)
            .ok_or(DirectoryError::InvalidCredentials)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        Ok(self.load().await?.into_iter().find(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    fn directory() -> KvUserDirectory {
        KvUserDirectory::new(Arc::new(MemoryKv::new()))
    }

    #[tokio::test]
    async fn test_login_matches_email_case_insensitively() {
        let directory = directory();
        directory
            .register("Ana", "ana@x.com", "123456")
            .await
            .unwrap();

        let user = directory.login("ANA@X.COM", "123456").await.unwrap();
        assert_eq!(user.email, "ana@x.com");
        assert_eq!(user.name, "Ana");
    }

    #[tokio::test]
    async fn test_password_must_match_exactly() {
        let directory = directory();
        directory
            .register("Ana", "ana@x.com", "123456")
            .await
            .unwrap();

        let err = directory.login("ana@x.com", "123457").await.unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_refused_and_not_appended() {
        let directory = directory();
        directory
            .register("Ana", "Ana@X.com", "123456")
            .await
            .unwrap();

        let err = directory
            .register("Other", "ana@x.com ", "abcdef")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateEmail));

        // The original password still wins, so nothing was overwritten.
        assert!(directory.login("ana@x.com", "123456").await.is_ok());
        assert!(directory.login("ana@x.com", "abcdef").await.is_err());
    }

    #[tokio::test]
    async fn test_registered_email_is_stored_normalized() {
        let directory = directory();
        let user = directory
            .register("  Ana  ", "  Ana@X.COM ", "123456")
            .await
            .unwrap();

        assert_eq!(user.email, "ana@x.com");
        assert_eq!(user.name, "Ana");
        assert!(directory
            .find_by_email("ana@x.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_corrupt_directory_reads_as_empty() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(USERS_KEY, "{definitely not an array").await.unwrap();
        let directory = KvUserDirectory::new(kv);

        let err = directory.login("ana@x.com", "123456").await.unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidCredentials));

        // Registration starts a fresh directory over the corrupt blob.
        assert!(directory.register("Ana", "ana@x.com", "123456").await.is_ok());
    }
}
