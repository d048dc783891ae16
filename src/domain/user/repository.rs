//! Credential store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::UserRecord;
use crate::domain::DomainError;

/// Storage capability for user credentials.
///
/// Implementations own password hashing: `create_user` receives the
/// plaintext and must only ever retain a salted hash of it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Register a new user.
    ///
    /// Fails with [`DomainError::DuplicateUser`] when the username is taken and
    /// with [`DomainError::HashingFailure`] when the password cannot be hashed.
    /// Neither failure mutates the store.
    async fn create_user(&self, username: &str, password: &str) -> Result<UserRecord, DomainError>;

    /// Look up a user, failing with [`DomainError::UserNotFound`] if absent
    async fn get_user_by_username(&self, username: &str) -> Result<UserRecord, DomainError>;

    /// Number of registered users
    async fn count(&self) -> Result<usize, DomainError>;
}
