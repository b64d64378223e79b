//! In-memory implementation of SessionRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use interviewer::{DomainError, Session, SessionRepository};

/// Token-keyed session table
///
/// Sessions without an expiry stay until removed; `purge_expired` never drops them.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(token).is_some())
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        Ok(before - sessions.len())
    }
}
