//! PMP Credential Service
//!
//! User registration and password login over HTTP:
//! - Argon2id salted password hashes, verified in constant time
//! - In-memory credential store safe for concurrent handlers
//! - Login failures that never reveal whether a username exists

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    auth::PlaceholderTokenIssuer,
    user::{Argon2Hasher, CredentialService, InMemoryCredentialStore, PasswordHasher},
};
use tracing::info;

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());
    create_app_state_with_hasher(config, hasher)
}

/// Create the application state around a specific password hasher
pub fn create_app_state_with_hasher(config: &AppConfig, hasher: Arc<dyn PasswordHasher>) -> AppState {
    let store = Arc::new(InMemoryCredentialStore::new(hasher.clone()));
    let tokens = Arc::new(PlaceholderTokenIssuer::new(
        config.auth.placeholder_token.clone(),
    ));

    info!("Using in-memory credential store");

    AppState::new(Arc::new(CredentialService::new(store, hasher, tokens)))
}
