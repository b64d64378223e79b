//! Interview request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ask for a generated question
#[derive(Debug, Deserialize, ToSchema)]
pub struct AskQuestionRequest {
    #[schema(example = "Google")]
    pub company: Option<String>,
    #[schema(example = "Software Engineer")]
    pub role: Option<String>,
}

/// Generated question (or soft-failure text)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub question: String,
}

/// Submit an answer for evaluation
#[derive(Debug, Deserialize, ToSchema)]
pub struct EvaluateAnswerRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// Reference answer and feedback
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EvaluationResponse {
    pub correct_answer: String,
    pub feedback: String,
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
