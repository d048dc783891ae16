//! Login token issuance

use crate::domain::user::UserRecord;

/// Issues the token returned by a successful login
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &UserRecord) -> String;
}

/// Returns the same configured string for every user.
///
/// The token carries no claims and nothing validates it; it only marks a
/// successful login to the caller.
#[derive(Debug, Clone)]
pub struct PlaceholderTokenIssuer {
    token: String,
}

impl PlaceholderTokenIssuer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenIssuer for PlaceholderTokenIssuer {
    fn issue(&self, _user: &UserRecord) -> String {
        self.token.clone()
    }
}
