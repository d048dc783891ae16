//! Credential input validation

use thiserror::Error;

/// Errors that can occur during credential validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CredentialValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Validate a username
///
/// Usernames are case-sensitive and otherwise unrestricted; only the empty
/// string is rejected.
pub fn validate_username(username: &str) -> Result<(), CredentialValidationError> {
    if username.is_empty() {
        return Err(CredentialValidationError::EmptyUsername);
    }

    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<(), CredentialValidationError> {
    if password.is_empty() {
        return Err(CredentialValidationError::EmptyPassword);
    }

    Ok(())
}

/// Validate a username/password pair
pub fn validate_credentials(username: &str, password: &str) -> Result<(), CredentialValidationError> {
    validate_username(username)?;
    validate_password(password)
}
