//! Credential service for registration and login

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::user::{CredentialStore, UserRecord};
use crate::domain::DomainError;
use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::observability::{record_login, record_registration};

use super::password::PasswordHasher;

/// Password hashed once at startup; unknown usernames are verified against it
const DUMMY_PASSWORD: &str = "credential-service-timing-equalizer";

/// Registration and login on top of a credential store
pub struct CredentialService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    dummy_hash: Option<String>,
}

impl CredentialService {
    /// Create a new credential service
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        let dummy_hash = match hasher.hash(DUMMY_PASSWORD) {
            Ok(hash) => Some(hash),
            Err(e) => {
                warn!(error = %e, "Could not prepare dummy hash, unknown users will answer faster");
                None
            }
        };

        Self {
            store,
            hasher,
            tokens,
            dummy_hash,
        }
    }

    /// Register a new user
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<UserRecord, DomainError> {
        match self.store.create_user(username, password).await {
            Ok(user) => {
                record_registration("created");
                info!(user_id = %user.id(), "User registered");
                Ok(user)
            }
            Err(e) => {
                record_registration(outcome_label(&e));
                warn!(error = %e, "Registration rejected");
                Err(e)
            }
        }
    }

    /// Authenticate a user with username and password
    ///
    /// Fails with `UserNotFound` or `CredentialMismatch`; callers must present
    /// both the same way.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserRecord, DomainError> {
        let result = self.verify(username, password).await;

        match &result {
            Ok(user) => {
                record_login("success");
                info!(user_id = %user.id(), "User logged in");
            }
            Err(e) => {
                record_login(outcome_label(e));
                warn!(error = %e, "Login rejected");
            }
        }

        result
    }

    /// Issue the token handed back on a successful login
    pub fn issue_token(&self, user: &UserRecord) -> String {
        self.tokens.issue(user)
    }

    /// Number of registered users
    pub async fn user_count(&self) -> Result<usize, DomainError> {
        self.store.count().await
    }

    async fn verify(&self, username: &str, password: &str) -> Result<UserRecord, DomainError> {
        let found = self.store.get_user_by_username(username).await;

        // An unknown user costs one verification too
        let hash = match &found {
            Ok(user) => Some(user.password_hash().to_string()),
            Err(DomainError::UserNotFound { .. }) => self.dummy_hash.clone(),
            Err(_) => None,
        };
        let Some(hash) = hash else {
            return found;
        };

        let hasher = self.hasher.clone();
        let password = password.to_string();

        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("verification task failed: {}", e)))?;

        let user = found?;
        if !matches {
            return Err(DomainError::CredentialMismatch);
        }

        Ok(user)
    }
}

impl std::fmt::Debug for CredentialService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialService").finish_non_exhaustive()
    }
}

fn outcome_label(error: &DomainError) -> &'static str {
    match error {
        DomainError::DuplicateUser { .. } => "duplicate",
        DomainError::UserNotFound { .. } => "unknown_user",
        DomainError::CredentialMismatch => "wrong_password",
        DomainError::HashingFailure { .. } => "hashing_failure",
        DomainError::Validation { .. } => "invalid",
        DomainError::Internal { .. } => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockCredentialStore, UserId};
    use crate::infrastructure::auth::PlaceholderTokenIssuer;
    use crate::infrastructure::user::password::{Argon2Hasher, MockPasswordHasher};
    use crate::infrastructure::user::store::InMemoryCredentialStore;

    fn create_service() -> CredentialService {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::fast());
        let store = Arc::new(InMemoryCredentialStore::new(hasher.clone()));
        let tokens = Arc::new(PlaceholderTokenIssuer::new("placeholder-token"));
        CredentialService::new(store, hasher, tokens)
    }

    #[tokio::test]
    async fn test_register_user() {
        let service = create_service();

        let user = service.register("alice", "secret123").await.unwrap();
        assert_eq!(user.username(), "alice");
        assert_eq!(service.user_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let service = create_service();

        service.register("alice", "secret123").await.unwrap();

        let result = service.register("alice", "secret123").await;
        assert!(matches!(result, Err(DomainError::DuplicateUser { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = create_service();

        let registered = service.register("alice", "secret123").await.unwrap();
        let user = service.authenticate("alice", "secret123").await.unwrap();

        assert_eq!(user.id(), registered.id());
        assert_eq!(service.issue_token(&user), "placeholder-token");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = create_service();

        service.register("alice", "secret123").await.unwrap();

        let result = service.authenticate("alice", "wrong").await;
        assert!(matches!(result, Err(DomainError::CredentialMismatch)));
    }

    #[tokio::test]
    async fn test_authenticate_nonexistent_user() {
        let service = create_service();

        let result = service.authenticate("bob", "x").await;
        assert!(matches!(result, Err(DomainError::UserNotFound { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_every_other_password_fails() {
        let service = create_service();

        service.register("alice", "secret123").await.unwrap();

        for attempt in ["", "secret12", "secret1234", "Secret123", " secret123"] {
            let result = service.authenticate("alice", attempt).await;
            assert!(result.is_err(), "password {:?} should not match", attempt);
        }
    }

    fn hasher_with_dummy() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .returning(|_| Ok("$dummy-hash".to_string()));
        hasher
    }

    #[tokio::test]
    async fn test_authenticate_missing_user_still_verifies() {
        let mut store = MockCredentialStore::new();
        store
            .expect_get_user_by_username()
            .returning(|username| Err(DomainError::user_not_found(username)));

        let mut hasher = hasher_with_dummy();
        hasher
            .expect_verify()
            .withf(|_, hash| hash.contains("$dummy-hash"))
            .times(1)
            .returning(|_, _| false);

        let service = CredentialService::new(
            Arc::new(store),
            Arc::new(hasher),
            Arc::new(PlaceholderTokenIssuer::new("t")),
        );

        let result = service.authenticate("ghost", "pw").await;
        assert!(matches!(result, Err(DomainError::UserNotFound { .. })));
    }

    #[tokio::test]
    async fn test_missing_user_never_matches_dummy_password() {
        let mut store = MockCredentialStore::new();
        store
            .expect_get_user_by_username()
            .returning(|username| Err(DomainError::user_not_found(username)));

        let service = CredentialService::new(
            Arc::new(store),
            Arc::new(Argon2Hasher::fast()),
            Arc::new(PlaceholderTokenIssuer::new("t")),
        );

        let result = service.authenticate("ghost", DUMMY_PASSWORD).await;
        assert!(matches!(result, Err(DomainError::UserNotFound { .. })));
    }

    #[tokio::test]
    async fn test_store_error_skips_verification() {
        let mut store = MockCredentialStore::new();
        store
            .expect_get_user_by_username()
            .returning(|_| Err(DomainError::internal("store unavailable")));

        // No verify expectation: a call would panic the mock
        let service = CredentialService::new(
            Arc::new(store),
            Arc::new(hasher_with_dummy()),
            Arc::new(PlaceholderTokenIssuer::new("t")),
        );

        let result = service.authenticate("alice", "pw").await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_corrupt_hash() {
        let mut store = MockCredentialStore::new();
        store
            .expect_get_user_by_username()
            .returning(|username| Ok(UserRecord::new(UserId::new(1), username, "not-a-phc-string")));

        let service = CredentialService::new(
            Arc::new(store),
            Arc::new(Argon2Hasher::fast()),
            Arc::new(PlaceholderTokenIssuer::new("t")),
        );

        let result = service.authenticate("alice", "secret123").await;
        assert!(matches!(result, Err(DomainError::CredentialMismatch)));
    }
}
