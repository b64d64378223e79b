//! Service Ports
//!
//! Abstract interfaces for external services.

mod llm_provider;
mod password_hasher;

pub use llm_provider::*;
pub use password_hasher::*;
