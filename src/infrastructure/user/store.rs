//! In-memory credential store implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::domain::user::{CredentialStore, UserId, UserRecord};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Map and id counter, always mutated together under one lock
#[derive(Debug)]
struct StoreState {
    users: HashMap<String, UserRecord>,
    next_user_id: u64,
}

impl StoreState {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            next_user_id: 1,
        }
    }
}

/// In-memory implementation of CredentialStore
pub struct InMemoryCredentialStore {
    state: RwLock<StoreState>,
    hasher: Arc<dyn PasswordHasher>,
}

impl InMemoryCredentialStore {
    /// Create a new empty store
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            state: RwLock::new(StoreState::new()),
            hasher,
        }
    }

    async fn hash_password(&self, password: &str) -> Result<String, DomainError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::hashing(format!("hashing task failed: {}", e)))?
    }
}

impl std::fmt::Debug for InMemoryCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCredentialStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    #[instrument(skip(self, password))]
    async fn create_user(&self, username: &str, password: &str) -> Result<UserRecord, DomainError> {
        // Cheap rejection before paying for a hash
        if self.state.read().await.users.contains_key(username) {
            return Err(DomainError::duplicate_user(username));
        }

        let password_hash = self.hash_password(password).await?;

        // Check and insert under the same write guard; a concurrent
        // registration may have won while we were hashing.
        let mut state = self.state.write().await;

        if state.users.contains_key(username) {
            return Err(DomainError::duplicate_user(username));
        }

        let user = UserRecord::new(UserId::new(state.next_user_id), username, password_hash);
        state.users.insert(username.to_string(), user.clone());
        state.next_user_id += 1;

        debug!(user_id = %user.id(), "User created");

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<UserRecord, DomainError> {
        let state = self.state.read().await;

        state
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| DomainError::user_not_found(username))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.state.read().await.users.len())
    }
}
