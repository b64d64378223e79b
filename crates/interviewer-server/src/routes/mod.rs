//! Interviewer Routes
//!
//! - /register, /login, /logout - Accounts and sessions (form posts, redirects)
//! - / - Practice page (login required)
//! - /ask_question - Generate a question (JSON)
//! - /evaluate_answer - Reference answer and feedback (JSON)

pub mod auth;
pub mod interview;
pub mod pages;
pub mod swagger;

use axum::{http::StatusCode, Json};

use interviewer::DomainError;

use crate::models::ErrorResponse;

/// Map a domain error onto an HTTP status and JSON error body
///
/// The JSON endpoints only reject input; anything else is an internal failure.
pub fn error_response(e: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        DomainError::Validation(message) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
        }
        other => {
            tracing::error!("Internal error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(other.to_string())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let (status, Json(body)) =
            error_response(DomainError::validation("Company and role are required"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Company and role are required");
    }

    #[test]
    fn test_other_errors_are_internal() {
        let (status, Json(body)) = error_response(DomainError::Hashing("boom".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Password hashing error: boom");
    }
}
