//! Domain layer - Core entities, errors and storage traits

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{CredentialStore, UserId, UserRecord};
