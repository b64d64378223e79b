//! Interviewer Domain Library
//!
//! Core domain types and interfaces for the AI mock-interview service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Session, Prompt)
//!   - `value_objects/`: Immutable value types (InterviewTask, catalog)
//!   - `services/`: Pure domain services (prompt builder)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: User and session storage
//!   - `services/`: Language-model provider and password hashing
//!
//! # Usage
//!
//! ```rust,ignore
//! use interviewer::domain::{build_question_prompt, InterviewTask};
//! use interviewer::ports::LlmProvider;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_answer_key_prompt, build_evaluation_prompt, build_question_prompt, ChatMessage,
    DomainError, InterviewTask, MessageRole, Prompt, Session, User, UserId, COMPANIES, JOB_ROLES,
};
pub use ports::{
    soft_text, Completion, CompletionOptions, GatewayError, LlmProvider, PasswordHasher,
    SessionRepository, UserRepository,
};
