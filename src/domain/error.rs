use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Username '{username}' already exists")]
    DuplicateUser { username: String },

    #[error("User '{username}' not found")]
    UserNotFound { username: String },

    #[error("Password does not match")]
    CredentialMismatch,

    #[error("Could not hash password: {message}")]
    HashingFailure { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::DuplicateUser {
            username: username.into(),
        }
    }

    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::HashingFailure {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for the two outcomes a login caller must not be able to tell apart
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::UserNotFound { .. } | Self::CredentialMismatch)
    }
}
