//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod mistral;
pub mod password;

// Re-exports
pub use memory::{InMemorySessionRepository, InMemoryUserRepository};
pub use mistral::{MistralClient, MistralConfig};
pub use password::Argon2PasswordHasher;
