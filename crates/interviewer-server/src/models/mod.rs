//! Interviewer Data Models
//!
//! - Interview: question / evaluation request and response bodies
//! - Auth: login and registration forms

mod auth;
mod interview;

pub use auth::*;
pub use interview::*;
