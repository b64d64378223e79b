//! Auth Application Service
//!
//! Registration, credential checks, and session lifecycle.

use std::sync::Arc;

use chrono::Duration;

use interviewer::{
    DomainError, PasswordHasher, Session, SessionRepository, User, UserId, UserRepository,
};

/// Application service for accounts and sessions
pub struct AuthService<U, S, H>
where
    U: UserRepository,
    S: SessionRepository,
    H: PasswordHasher + 'static,
{
    users: Arc<U>,
    sessions: Arc<S>,
    hasher: Arc<H>,
    session_ttl: Option<Duration>,
}

impl<U, S, H> AuthService<U, S, H>
where
    U: UserRepository,
    S: SessionRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(users: Arc<U>, sessions: Arc<S>, hasher: Arc<H>) -> Self {
        Self {
            users,
            sessions,
            hasher,
            session_ttl: None,
        }
    }

    /// Expire sessions after `ttl`; `None` keeps them until logout
    pub fn with_session_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Register a new user
    pub async fn register(&self, username: &str, password: &str) -> Result<User, DomainError> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::validation("Username and password are required"));
        }

        // Cheap pre-check to skip hashing; the repository enforces uniqueness atomically.
        if self.users.find_by_username(username).await?.is_some() {
            tracing::warn!("Registration rejected: username already exists");
            return Err(DomainError::DuplicateUsername(username.to_string()));
        }

        let password_hash = self.hash(password).await?;
        let user = self.users.register(username, password_hash).await?;

        tracing::info!("Registered user: {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Check credentials without creating a session
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserId, DomainError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(DomainError::InvalidCredentials);
        };

        if self.verify(password, &user.password_hash).await? {
            Ok(user.id)
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }

    /// Authenticate and open a new session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, DomainError> {
        let user_id = match self.authenticate(username, password).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Failed login attempt");
                return Err(e);
            }
        };

        let session = Session::new(user_id, username.to_string(), self.session_ttl);
        self.sessions.insert(session.clone()).await?;

        tracing::info!("User logged in: {} ({})", session.username, session.user_id);

        Ok(session)
    }

    /// Look up a live session; expired sessions are dropped
    pub async fn resolve(&self, token: &str) -> Result<Option<Session>, DomainError> {
        match self.sessions.find(token).await? {
            Some(session) if session.is_expired() => {
                self.sessions.remove(token).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// End a session; unknown tokens are ignored
    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        if let Some(session) = self.sessions.find(token).await? {
            self.sessions.remove(token).await?;
            tracing::info!("User logged out: {} ({})", session.username, session.user_id);
        }
        Ok(())
    }

    /// Drop expired sessions
    pub async fn purge_expired_sessions(&self) -> Result<usize, DomainError> {
        self.sessions.purge_expired().await
    }

    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Hashing(e.to_string()))?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| DomainError::Hashing(e.to_string()))?
    }
}
