//! Repository Ports
//!
//! Abstract interfaces for process-lifetime storage.

mod session_repository;
mod user_repository;

pub use session_repository::*;
pub use user_repository::*;
