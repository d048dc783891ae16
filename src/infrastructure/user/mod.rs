//! User infrastructure module
//!
//! Password hashing with Argon2, the in-memory credential store and the
//! credential service used by the HTTP handlers.

mod password;
mod service;
mod store;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::CredentialService;
pub use store::InMemoryCredentialStore;
