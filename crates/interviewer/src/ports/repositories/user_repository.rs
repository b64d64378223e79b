//! User Repository Port
//!
//! Abstract interface for the credential store.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, User};

/// Repository interface for registered users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with an already-hashed password.
    ///
    /// Fails with `DomainError::DuplicateUsername` if the username is taken.
    /// The uniqueness check and the insert must be atomic.
    async fn register(&self, username: &str, password_hash: String) -> Result<User, DomainError>;

    /// Find a user by exact (case-sensitive) username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Number of registered users
    async fn count(&self) -> Result<usize, DomainError>;
}
