//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::user::CredentialService;

/// Application state shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub credentials: Arc<CredentialService>,
}

impl AppState {
    pub fn new(credentials: Arc<CredentialService>) -> Self {
        Self { credentials }
    }
}
