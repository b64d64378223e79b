//! Value Objects
//!
//! Immutable value types used across the domain.

mod catalog;
mod interview_task;

pub use catalog::*;
pub use interview_task::*;
