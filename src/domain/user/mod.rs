//! User domain
//!
//! This module provides the user record, credential validation and the
//! credential store trait.

mod entity;
mod repository;
mod validation;

pub use entity::{UserId, UserRecord};
pub use repository::CredentialStore;
pub use validation::{
    validate_credentials, validate_password, validate_username, CredentialValidationError,
};

#[cfg(test)]
pub use repository::MockCredentialStore;
