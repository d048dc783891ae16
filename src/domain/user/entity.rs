//! User record and related types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User identifier - assigned by the store, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user and its password hash
#[derive(Clone, Serialize)]
pub struct UserRecord {
    id: UserId,
    username: String,
    /// Argon2 PHC string - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(id: UserId, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> UserRecord {
        UserRecord::new(UserId::new(1), "alice", "$argon2id$v=19$hashed")
    }

    #[test]
    fn test_record_creation() {
        let record = create_test_record();

        assert_eq!(record.id(), UserId::new(1));
        assert_eq!(record.id().value(), 1);
        assert_eq!(record.username(), "alice");
        assert_eq!(record.password_hash(), "$argon2id$v=19$hashed");
        assert!(record.created_at() <= Utc::now());
    }

    #[test]
    fn test_user_ids_order() {
        assert!(UserId::new(1) < UserId::new(2));
        assert_eq!(UserId::new(7).to_string(), "7");
    }

    #[test]
    fn test_serialization_excludes_password_hash() {
        let record = create_test_record();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("alice"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let record = create_test_record();

        let debug = format!("{:?}", record);
        assert!(debug.contains("alice"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("argon2id"));
    }
}
