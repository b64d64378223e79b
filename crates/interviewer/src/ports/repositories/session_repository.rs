//! Session Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Session};

/// Repository interface for logged-in sessions
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a session, keyed by its token
    async fn insert(&self, session: Session) -> Result<(), DomainError>;

    /// Find a session by token (expired sessions are returned as stored)
    async fn find(&self, token: &str) -> Result<Option<Session>, DomainError>;

    /// Remove a session, returning whether it existed
    async fn remove(&self, token: &str) -> Result<bool, DomainError>;

    /// Drop every expired session, returning how many were removed
    async fn purge_expired(&self) -> Result<usize, DomainError>;
}
