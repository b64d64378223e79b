//! In-memory implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use interviewer::{DomainError, User, UserId, UserRepository};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    /// username -> id
    by_username: HashMap<String, UserId>,
}

/// Lock-guarded user directory
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Users>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn register(&self, username: &str, password_hash: String) -> Result<User, DomainError> {
        // Check and insert under one write lock so concurrent registrations cannot both win.
        let mut users = self.users.write().await;

        if users.by_username.contains_key(username) {
            return Err(DomainError::DuplicateUsername(username.to_string()));
        }

        let id = UserId::from_sequence(users.by_id.len() + 1);
        let user = User::new(id.clone(), username.to_string(), password_hash);

        users.by_username.insert(user.username.clone(), id.clone());
        users.by_id.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .by_username
            .get(username)
            .and_then(|id| users.by_id.get(id))
            .cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.by_id.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_register_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.register("alice", "h1".to_string()).await.unwrap();
        let bob = repo.register("bob", "h2".to_string()).await.unwrap();

        assert_eq!(alice.id.as_str(), "1");
        assert_eq!(bob.id.as_str(), "2");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.register("alice", "h1".to_string()).await.unwrap();

        let err = repo.register("alice", "h2".to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateUsername(name) if name == "alice"));
        assert_eq!(repo.count().await.unwrap(), 1);

        let stored = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "h1");
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.register("alice", "h1".to_string()).await.unwrap();
        repo.register("Alice", "h2".to_string()).await.unwrap();

        assert!(repo.find_by_username("ALICE").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_keep_usernames_unique() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.register("same", format!("h{i}")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
