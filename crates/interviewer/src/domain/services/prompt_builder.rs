//! Prompt Builder
//!
//! Builds the system + user prompt for each interview task. Input fields are
//! interpolated verbatim.

use crate::domain::entities::Prompt;

const QUESTION_SYSTEM: &str = "You are a technical interviewer.";
const ANSWER_KEY_SYSTEM: &str =
    "You are a technical interviewer. Provide the correct answer for the given question.";
const EVALUATION_SYSTEM: &str =
    "You are an AI that evaluates interview answers and gives feedback.";

/// Prompt asking for a technical question for `role` at `company`
pub fn build_question_prompt(company: &str, role: &str) -> Prompt {
    Prompt::new(
        QUESTION_SYSTEM,
        format!("Generate a technical interview question for a {role} at {company}."),
    )
}

/// Prompt asking for the reference answer to `question`
pub fn build_answer_key_prompt(question: &str) -> Prompt {
    Prompt::new(
        ANSWER_KEY_SYSTEM,
        format!("Question: {question}\nProvide the correct answer."),
    )
}

/// Prompt asking for feedback on `user_answer` given the reference answer
pub fn build_evaluation_prompt(question: &str, user_answer: &str, correct_answer: &str) -> Prompt {
    Prompt::new(
        EVALUATION_SYSTEM,
        format!(
            "Question: {question}\nUser's Answer: {user_answer}\nCorrect Answer: {correct_answer}\nGive feedback on correctness and improvement suggestions."
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt() {
        let prompt = build_question_prompt("Google", "Software Engineer");
        assert_eq!(prompt.system(), "You are a technical interviewer.");
        assert_eq!(
            prompt.user(),
            "Generate a technical interview question for a Software Engineer at Google."
        );
    }

    #[test]
    fn test_answer_key_prompt() {
        let prompt = build_answer_key_prompt("What is a mutex?");
        assert!(prompt.system().ends_with("Provide the correct answer for the given question."));
        assert_eq!(
            prompt.user(),
            "Question: What is a mutex?\nProvide the correct answer."
        );
    }

    #[test]
    fn test_evaluation_prompt_includes_all_fields() {
        let prompt = build_evaluation_prompt("Q", "my answer", "the answer");
        assert_eq!(
            prompt.system(),
            "You are an AI that evaluates interview answers and gives feedback."
        );
        assert_eq!(
            prompt.user(),
            "Question: Q\nUser's Answer: my answer\nCorrect Answer: the answer\nGive feedback on correctness and improvement suggestions."
        );
    }

    #[test]
    fn test_fields_passed_through_verbatim() {
        let prompt = build_question_prompt("<Acme & Co>", "{role}\n\"quoted\"");
        assert!(prompt.user().contains("<Acme & Co>"));
        assert!(prompt.user().contains("{role}\n\"quoted\""));
    }
}
