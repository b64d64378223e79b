//! User - Registered account
//!
//! Pure domain entity without infrastructure dependencies.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque user identity, assigned by the credential store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identity for the `n`-th registered user (1-based)
    pub fn from_sequence(n: usize) -> Self {
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User - Registered account with a one-way password hash
///
/// The plaintext password never reaches this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, username: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_sequence() {
        assert_eq!(UserId::from_sequence(1).as_str(), "1");
        assert_eq!(UserId::from_sequence(42).to_string(), "42");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            UserId::new("1"),
            "alice".to_string(),
            "$argon2id$secret".to_string(),
        );
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
    }
}
