//! OpenAPI Documentation
//!
//! Covers the JSON endpoints; the HTML/form routes are not documented.

use utoipa::OpenApi;

use crate::models::{
    AskQuestionRequest, ErrorResponse, EvaluateAnswerRequest, EvaluationResponse,
    QuestionResponse,
};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::interview::ask_question,
        super::interview::evaluate_answer,
    ),
    info(
        title = "Interviewer API",
        version = "0.1.0",
        description = "AI mock interviews: generated questions, reference answers, and feedback.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Interview", description = "Question generation and answer evaluation"),
    ),
    components(
        schemas(
            HealthCheck,
            AskQuestionRequest,
            QuestionResponse,
            EvaluateAnswerRequest,
            EvaluationResponse,
            ErrorResponse,
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_interview_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/ask_question"));
        assert!(doc.paths.paths.contains_key("/evaluate_answer"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
