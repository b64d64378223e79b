//! Interview Task - the three language-model call sites

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sampling temperature shared by every interview task
pub const INTERVIEW_TEMPERATURE: f32 = 0.7;

/// Which step of the interview flow a completion serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewTask {
    /// Generate a question for a company/role pair
    Question,
    /// Produce the reference answer to a question
    AnswerKey,
    /// Compare the candidate's answer against the reference answer
    Evaluation,
}

impl InterviewTask {
    pub fn max_tokens(self) -> u32 {
        match self {
            InterviewTask::Question => 100,
            InterviewTask::AnswerKey => 200,
            InterviewTask::Evaluation => 150,
        }
    }

    pub fn temperature(self) -> f32 {
        INTERVIEW_TEMPERATURE
    }

    /// Text returned when the provider answers without any content
    pub fn fallback_text(self) -> &'static str {
        match self {
            InterviewTask::Question => "No question generated.",
            InterviewTask::AnswerKey => "No answer generated.",
            InterviewTask::Evaluation => "No feedback generated.",
        }
    }
}

impl fmt::Display for InterviewTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterviewTask::Question => write!(f, "question"),
            InterviewTask::AnswerKey => write!(f, "answer_key"),
            InterviewTask::Evaluation => write!(f, "evaluation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_budgets() {
        assert_eq!(InterviewTask::Question.max_tokens(), 100);
        assert_eq!(InterviewTask::AnswerKey.max_tokens(), 200);
        assert_eq!(InterviewTask::Evaluation.max_tokens(), 150);
    }

    #[test]
    fn test_fallbacks_are_task_specific() {
        assert_eq!(
            InterviewTask::Question.fallback_text(),
            "No question generated."
        );
        assert_eq!(
            InterviewTask::AnswerKey.fallback_text(),
            "No answer generated."
        );
        assert_eq!(
            InterviewTask::Evaluation.fallback_text(),
            "No feedback generated."
        );
    }
}
