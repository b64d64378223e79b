//! In-memory repositories
//!
//! Process-lifetime storage; everything is lost on restart.

mod session_repository;
mod user_repository;

pub use session_repository::InMemorySessionRepository;
pub use user_repository::InMemoryUserRepository;
