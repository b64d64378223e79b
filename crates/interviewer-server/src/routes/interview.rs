//! Interview Routes - AI-generated questions and feedback
//!
//! Provider failures are reported inside the 200 body, never as 5xx.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::models::{
    AskQuestionRequest, ErrorResponse, EvaluateAnswerRequest, EvaluationResponse,
    QuestionResponse,
};
use crate::routes::error_response;
use crate::AppState;

/// Generate an interview question
#[utoipa::path(
    post,
    path = "/ask_question",
    request_body = AskQuestionRequest,
    responses(
        (status = 200, description = "Generated question, or provider error text", body = QuestionResponse),
        (status = 400, description = "Company or role missing", body = ErrorResponse)
    ),
    tag = "Interview"
)]
pub async fn ask_question(
    State(state): State<AppState>,
    Json(payload): Json<AskQuestionRequest>,
) -> Result<Json<QuestionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let question = state
        .interview
        .ask_question(payload.company.as_deref(), payload.role.as_deref())
        .await
        .map_err(error_response)?;

    Ok(Json(QuestionResponse { question }))
}

/// Produce the correct answer and feedback for a submitted answer
#[utoipa::path(
    post,
    path = "/evaluate_answer",
    request_body = EvaluateAnswerRequest,
    responses(
        (status = 200, description = "Correct answer and feedback, or provider error text", body = EvaluationResponse),
        (status = 400, description = "Question or answer missing", body = ErrorResponse)
    ),
    tag = "Interview"
)]
pub async fn evaluate_answer(
    State(state): State<AppState>,
    Json(payload): Json<EvaluateAnswerRequest>,
) -> Result<Json<EvaluationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let outcome = state
        .interview
        .evaluate_answer(payload.question.as_deref(), payload.answer.as_deref())
        .await
        .map_err(error_response)?;

    Ok(Json(EvaluationResponse {
        correct_answer: outcome.correct_answer,
        feedback: outcome.feedback,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ask_question", post(ask_question))
        .route("/evaluate_answer", post(evaluate_answer))
}
