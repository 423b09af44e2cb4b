//! Credential store
//!
//! In-memory, insertion-ordered collection of user records. Registration and
//! authentication hash on the blocking thread pool; lookups and removal are
//! plain synchronous scans.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info};
use tokio::task;

use super::credentials::UserRecord;
use super::hasher::{BcryptHasher, PasswordHasher};
use super::results::{AuthOutcome, RegisterOutcome};
use crate::config::StoreConfig;
use crate::error::CredentialError;

/// Owned credential store. Share it with `Arc` when several tasks need it.
pub struct CredentialStore<H: PasswordHasher = BcryptHasher> {
    records: RwLock<Vec<UserRecord>>,
    hasher: Arc<H>,
}

impl CredentialStore<BcryptHasher> {
    /// Store backed by bcrypt at the given work factor
    pub fn with_cost(cost: u32) -> Self {
        Self::new(BcryptHasher::new(cost))
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_cost(config.bcrypt_cost)
    }
}

impl Default for CredentialStore<BcryptHasher> {
    fn default() -> Self {
        Self::new(BcryptHasher::default())
    }
}

impl<H: PasswordHasher> CredentialStore<H> {
    pub fn new(hasher: H) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            hasher: Arc::new(hasher),
        }
    }

    /// Registers `username` with a hash of `password`.
    ///
    /// Suspends the caller while the password is hashed. The username is
    /// checked again under the write lock before the record is appended, so
    /// two concurrent registrations of the same name cannot both succeed.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisterOutcome, CredentialError> {
        if self.username_exists(username) {
            debug!("Registration rejected, username taken: {}", username);
            return Ok(RegisterOutcome::UsernameTaken);
        }

        let password_hash = self.hash_password(password).await?;

        let mut records = self.write_records();
        if records.iter().any(|record| record.username() == username) {
            debug!("Registration lost race for username: {}", username);
            return Ok(RegisterOutcome::UsernameTaken);
        }
        records.push(UserRecord::new(username, password_hash));

        info!("Registered user: {}", username);
        Ok(RegisterOutcome::Registered)
    }

    /// Checks `password` against the stored hash for `username`.
    ///
    /// Suspends the caller while the hash is verified. Unknown users and wrong
    /// passwords both yield `AuthOutcome::Failed`.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, CredentialError> {
        let Some(record) = self.get_user_by_username(username) else {
            debug!("Authentication failed for {}", username);
            return Ok(AuthOutcome::Failed);
        };

        if self.verify_password(password, record.password_hash()).await? {
            info!("User logged in: {}", username);
            Ok(AuthOutcome::Succeeded)
        } else {
            debug!("Authentication failed for {}", username);
            Ok(AuthOutcome::Failed)
        }
    }

    pub fn username_exists(&self, username: &str) -> bool {
        self.read_records()
            .iter()
            .any(|record| record.username() == username)
    }

    /// Returns a copy of the record, hash included.
    pub fn get_user_by_username(&self, username: &str) -> Option<UserRecord> {
        self.read_records()
            .iter()
            .find(|record| record.username() == username)
            .cloned()
    }

    /// Removes the user if present; unknown usernames are ignored.
    pub fn remove_user_by_username(&self, username: &str) {
        let mut records = self.write_records();
        let before = records.len();
        records.retain(|record| record.username() != username);

        if records.len() < before {
            info!("Removed user: {}", username);
        }
    }

    pub fn len(&self) -> usize {
        self.read_records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_records().is_empty()
    }

    /// Registered usernames in registration order
    pub fn usernames(&self) -> Vec<String> {
        self.read_records()
            .iter()
            .map(|record| record.username().to_string())
            .collect()
    }

    async fn hash_password(&self, password: &str) -> Result<String, CredentialError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();

        task::spawn_blocking(move || hasher.hash(&password)).await?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();

        task::spawn_blocking(move || hasher.verify(&password, &hash)).await?
    }

    // A panic while holding the lock cannot leave the Vec half-updated.
    fn read_records(&self) -> RwLockReadGuard<'_, Vec<UserRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_records(&self) -> RwLockWriteGuard<'_, Vec<UserRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingHasher;

    impl PasswordHasher for FailingHasher {
        fn hash(&self, _plaintext: &str) -> Result<String, CredentialError> {
            Err(CredentialError::Hashing("hasher offline".into()))
        }

        fn verify(&self, _plaintext: &str, _hash: &str) -> Result<bool, CredentialError> {
            Err(CredentialError::Verification("hasher offline".into()))
        }
    }

    fn test_store() -> CredentialStore {
        CredentialStore::with_cost(4)
    }

    #[tokio::test]
    async fn test_register_then_exists() {
        let store = test_store();
        assert!(!store.username_exists("alice"));

        let outcome = store.register("alice", "pw1").await.unwrap();

        assert_eq!(outcome, RegisterOutcome::Registered);
        assert!(store.username_exists("alice"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_keeps_original_hash() {
        let store = test_store();
        store.register("alice", "pw1").await.unwrap();
        let original = store.get_user_by_username("alice").unwrap();

        let outcome = store.register("alice", "pw9").await.unwrap();

        assert_eq!(outcome, RegisterOutcome::UsernameTaken);
        assert_eq!(store.get_user_by_username("alice").unwrap(), original);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_username_match_is_case_sensitive() {
        let store = test_store();
        store.register("alice", "pw1").await.unwrap();

        assert!(!store.username_exists("Alice"));
        assert_eq!(
            store.register("Alice", "pw2").await.unwrap(),
            RegisterOutcome::Registered
        );
    }

    #[tokio::test]
    async fn test_stored_hash_is_not_plaintext() {
        let store = test_store();
        store.register("alice", "pw1").await.unwrap();

        let record = store.get_user_by_username("alice").unwrap();
        assert_eq!(record.username(), "alice");
        assert_ne!(record.password_hash(), "pw1");
        assert!(record.password_hash().starts_with("$2"));
    }

    #[tokio::test]
    async fn test_authenticate_outcomes() {
        let store = test_store();
        store.register("alice", "pw1").await.unwrap();

        assert_eq!(
            store.authenticate("alice", "pw1").await.unwrap(),
            AuthOutcome::Succeeded
        );
        assert_eq!(
            store.authenticate("alice", "pw9").await.unwrap(),
            AuthOutcome::Failed
        );
        assert_eq!(
            store.authenticate("mallory", "pw1").await.unwrap(),
            AuthOutcome::Failed
        );
    }

    #[tokio::test]
    async fn test_remove_is_silent_on_miss() {
        let store = test_store();
        store.register("alice", "pw1").await.unwrap();
        store.register("bob", "pw2").await.unwrap();

        store.remove_user_by_username("carol");
        assert_eq!(store.usernames(), vec!["alice", "bob"]);

        store.remove_user_by_username("alice");
        assert!(!store.username_exists("alice"));
        assert!(store.get_user_by_username("alice").is_none());
        assert_eq!(store.usernames(), vec!["bob"]);
    }

    #[tokio::test]
    async fn test_hashing_failure_is_returned() {
        let store = CredentialStore::new(FailingHasher);

        let result = store.register("alice", "pw1").await;

        assert!(matches!(result, Err(CredentialError::Hashing(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_stored_hash_is_returned_as_error() {
        let store = CredentialStore::with_cost(4);
        store
            .write_records()
            .push(UserRecord::new("alice", "not-a-bcrypt-hash"));

        let result = store.authenticate("alice", "pw1").await;

        assert!(matches!(result, Err(CredentialError::Verification(_))));
    }

    #[tokio::test]
    async fn test_unknown_user_never_reaches_hasher() {
        let store = CredentialStore::new(FailingHasher);

        let outcome = store.authenticate("ghost", "pw").await.unwrap();

        assert_eq!(outcome, AuthOutcome::Failed);
    }
}
