//! Interview Application Service (Use Case)
//!
//! Sequences the language-model calls behind the two interview endpoints.

use std::sync::Arc;

use interviewer::{
    build_answer_key_prompt, build_evaluation_prompt, build_question_prompt, DomainError,
    InterviewTask, LlmProvider,
};

/// Reference answer plus feedback for a submitted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub correct_answer: String,
    pub feedback: String,
}

/// Application service for the question/answer flow
pub struct InterviewService<P: LlmProvider + ?Sized> {
    provider: Arc<P>,
}

/// Both fields present and non-empty. Whitespace counts as content.
fn require<'a>(a: Option<&'a str>, b: Option<&'a str>) -> Option<(&'a str, &'a str)> {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => Some((a, b)),
        _ => None,
    }
}

impl<P: LlmProvider + ?Sized> InterviewService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Generate a question for `company` and `role`.
    ///
    /// Provider failures come back as the question text.
    pub async fn ask_question(
        &self,
        company: Option<&str>,
        role: Option<&str>,
    ) -> Result<String, DomainError> {
        let Some((company, role)) = require(company, role) else {
            return Err(DomainError::validation("Company and role are required"));
        };

        tracing::info!(
            "Generating question for {} at {} via {}",
            role,
            company,
            self.provider.model_id()
        );

        let prompt = build_question_prompt(company, role);
        Ok(self
            .provider
            .complete_task(&prompt, InterviewTask::Question)
            .await)
    }

    /// Produce the reference answer, then feedback on `answer` against it.
    ///
    /// The two calls run in order; a failure in the second does not undo the first.
    pub async fn evaluate_answer(
        &self,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<EvaluationOutcome, DomainError> {
        let Some((question, answer)) = require(question, answer) else {
            return Err(DomainError::validation("Question and answer are required"));
        };

        let correct_answer = self
            .provider
            .complete_task(&build_answer_key_prompt(question), InterviewTask::AnswerKey)
            .await;

        let feedback = self
            .provider
            .complete_task(
                &build_evaluation_prompt(question, answer, &correct_answer),
                InterviewTask::Evaluation,
            )
            .await;

        Ok(EvaluationOutcome {
            correct_answer,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use interviewer::{Completion, CompletionOptions, GatewayError, Prompt};

    /// Replays canned outcomes in order and records what it was sent
    #[derive(Default)]
    struct ScriptedProvider {
        outcomes: Mutex<VecDeque<Result<Completion, GatewayError>>>,
        calls: Mutex<Vec<(Prompt, CompletionOptions)>>,
    }

    impl ScriptedProvider {
        fn new(outcomes: Vec<Result<Completion, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: Mutex::default(),
            })
        }

        fn calls(&self) -> Vec<(Prompt, CompletionOptions)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn complete(
            &self,
            prompt: &Prompt,
            options: &CompletionOptions,
        ) -> Result<Completion, GatewayError> {
            self.calls.lock().unwrap().push((prompt.clone(), *options));
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected provider call")
        }

        fn display_name(&self) -> &str {
            "Mistral"
        }

        fn model_id(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_ask_question() {
        let provider = ScriptedProvider::new(vec![Ok(Completion::new("Explain X"))]);
        let service = InterviewService::new(provider.clone());

        let question = service
            .ask_question(Some("Google"), Some("Software Engineer"))
            .await
            .unwrap();
        assert_eq!(question, "Explain X");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].0.user(),
            "Generate a technical interview question for a Software Engineer at Google."
        );
        assert_eq!(calls[0].1.max_tokens, 100);
    }

    #[tokio::test]
    async fn test_ask_question_requires_fields() {
        let provider = ScriptedProvider::new(vec![]);
        let service = InterviewService::new(provider.clone());

        for (company, role) in [
            (Some(""), Some("")),
            (None, Some("Software Engineer")),
            (Some("Google"), None),
        ] {
            let err = service.ask_question(company, role).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref m) if m == "Company and role are required"));
        }
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ask_question_whitespace_fields_reach_provider() {
        let provider = ScriptedProvider::new(vec![Ok(Completion::new("Explain Y"))]);
        let service = InterviewService::new(provider.clone());

        let question = service
            .ask_question(Some("   "), Some("Software Engineer"))
            .await
            .unwrap();
        assert_eq!(question, "Explain Y");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].0.user(),
            "Generate a technical interview question for a Software Engineer at    ."
        );
    }

    #[tokio::test]
    async fn test_ask_question_soft_failure() {
        let provider = ScriptedProvider::new(vec![Err(GatewayError::Upstream {
            status: 500,
            body: String::new(),
        })]);
        let service = InterviewService::new(provider);

        let question = service
            .ask_question(Some("Google"), Some("Software Engineer"))
            .await
            .unwrap();
        assert_eq!(question, "Error: Mistral API returned 500.");
    }

    #[tokio::test]
    async fn test_evaluate_answer_sequences_calls() {
        let provider = ScriptedProvider::new(vec![
            Ok(Completion::new("correct")),
            Ok(Completion::new("good job")),
        ]);
        let service = InterviewService::new(provider.clone());

        let outcome = service.evaluate_answer(Some("Q"), Some("A")).await.unwrap();
        assert_eq!(
            outcome,
            EvaluationOutcome {
                correct_answer: "correct".to_string(),
                feedback: "good job".to_string(),
            }
        );

        let calls = provider.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0.user(), "Question: Q\nProvide the correct answer.");
        assert_eq!(calls[0].1.max_tokens, 200);
        assert_eq!(
            calls[1].0.user(),
            "Question: Q\nUser's Answer: A\nCorrect Answer: correct\nGive feedback on correctness and improvement suggestions."
        );
        assert_eq!(calls[1].1.max_tokens, 150);
    }

    #[tokio::test]
    async fn test_evaluate_answer_second_call_fails() {
        let provider = ScriptedProvider::new(vec![
            Ok(Completion::new("correct")),
            Err(GatewayError::Transport("reset".to_string())),
        ]);
        let service = InterviewService::new(provider);

        let outcome = service.evaluate_answer(Some("Q"), Some("A")).await.unwrap();
        assert_eq!(outcome.correct_answer, "correct");
        assert_eq!(outcome.feedback, "Error: Failed to connect to Mistral API.");
    }

    #[tokio::test]
    async fn test_evaluate_answer_fallbacks_chain() {
        let provider =
            ScriptedProvider::new(vec![Ok(Completion::empty()), Ok(Completion::empty())]);
        let service = InterviewService::new(provider.clone());

        let outcome = service.evaluate_answer(Some("Q"), Some("A")).await.unwrap();
        assert_eq!(outcome.correct_answer, "No answer generated.");
        assert_eq!(outcome.feedback, "No feedback generated.");
        assert!(provider.calls()[1]
            .0
            .user()
            .contains("Correct Answer: No answer generated."));
    }

    #[tokio::test]
    async fn test_evaluate_answer_requires_fields() {
        let provider = ScriptedProvider::new(vec![]);
        let service = InterviewService::new(provider.clone());

        let err = service.evaluate_answer(Some("Q"), Some("")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "Question and answer are required"));
        assert!(provider.calls().is_empty());
    }
}
