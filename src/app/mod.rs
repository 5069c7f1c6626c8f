pub mod openai;
pub mod prompt;

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Submissions shorter than this (in characters, not bytes or tokens) are
/// rejected before any provider call.
pub const MIN_SUBMISSION_CHARS: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(rename = "userText")]
    pub user_text: Option<String>,
}

impl Submission {
    fn text_for_analysis(&self) -> Option<&str> {
        self.user_text
            .as_deref()
            .filter(|text| text.chars().count() >= MIN_SUBMISSION_CHARS)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub reply: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Text too short for analysis.")]
    TooShort,

    #[error("OpenAI API error")]
    Completion(#[source] anyhow::Error),
}

/// Seam between the analyzer and the completion provider. The production
/// implementation lives in [`openai`]; tests substitute their own.
pub trait CompletionBackend: Send + Sync {
    fn complete(
        &self,
        system: String,
        user: String,
    ) -> Pin<Box<dyn Future<Output = Result<String, anyhow::Error>> + Send + '_>>;
}

pub struct Analyzer {
    backend: Box<dyn CompletionBackend>,
}

impl Analyzer {
    #[must_use]
    pub fn new(backend: impl CompletionBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Validates the submission, then delegates to the completion backend
    /// with the fixed instruction context. One outbound call per valid
    /// submission; none for rejected ones.
    pub async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult, Error> {
        let text = submission.text_for_analysis().ok_or(Error::TooShort)?;

        let reply = self
            .backend
            .complete(
                prompt::INSTRUCTION_CONTEXT.to_string(),
                prompt::frame_article(text),
            )
            .await
            .map_err(Error::Completion)?;

        Ok(AnalysisResult { reply })
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    enum Outcome {
        Reply(&'static str),
        Failure,
    }

    struct Stub {
        outcome: Outcome,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Option<(String, String)>>>,
    }

    impl Stub {
        fn new(outcome: Outcome) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Option<(String, String)>>>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let seen = Arc::new(Mutex::new(None));
            let stub = Self {
                outcome,
                calls: calls.clone(),
                seen: seen.clone(),
            };
            (stub, calls, seen)
        }
    }

    impl CompletionBackend for Stub {
        fn complete(
            &self,
            system: String,
            user: String,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<String, anyhow::Error>> + Send + '_>,
        > {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen.lock().unwrap() = Some((system, user));
            let result = match self.outcome {
                Outcome::Reply(reply) => Ok(reply.to_string()),
                Outcome::Failure => Err(anyhow::anyhow!("connection refused")),
            };
            Box::pin(async move { result })
        }
    }

    fn submission(text: &str) -> Submission {
        Submission {
            user_text: Some(text.to_string()),
        }
    }

    #[tokio::test]
    async fn missing_text_is_rejected_without_a_provider_call() {
        let (stub, calls, _) = Stub::new(Outcome::Reply("unused"));
        let analyzer = Analyzer::new(stub);

        let err = analyzer
            .analyze(&Submission { user_text: None })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TooShort));
        assert_eq!(err.to_string(), "Text too short for analysis.");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ninety_nine_characters_are_rejected() {
        let (stub, calls, _) = Stub::new(Outcome::Reply("unused"));
        let analyzer = Analyzer::new(stub);

        let err = analyzer.analyze(&submission(&"x".repeat(99))).await.unwrap_err();

        assert!(matches!(err, Error::TooShort));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn one_hundred_characters_are_accepted() {
        let (stub, calls, _) = Stub::new(Outcome::Reply("Mock analysis."));
        let analyzer = Analyzer::new(stub);

        let result = analyzer.analyze(&submission(&"x".repeat(100))).await.unwrap();

        assert_eq!(result.reply, "Mock analysis.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn length_is_counted_in_characters_not_bytes() {
        let (stub, _, _) = Stub::new(Outcome::Reply("Mock analysis."));
        let analyzer = Analyzer::new(stub);

        // 100 two-byte characters.
        let result = analyzer.analyze(&submission(&"é".repeat(100))).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn reply_is_passed_through_unmodified() {
        let (stub, _, _) = Stub::new(Outcome::Reply("  verbatim, whitespace included \n"));
        let analyzer = Analyzer::new(stub);

        let result = analyzer.analyze(&submission(&"x".repeat(120))).await.unwrap();

        assert_eq!(result.reply, "  verbatim, whitespace included \n");
    }

    #[tokio::test]
    async fn backend_receives_instruction_context_and_framed_article() {
        let (stub, _, seen) = Stub::new(Outcome::Reply("Mock analysis."));
        let analyzer = Analyzer::new(stub);
        let article = "a".repeat(120);

        analyzer.analyze(&submission(&article)).await.unwrap();

        let (system, user) = seen.lock().unwrap().take().unwrap();
        assert_eq!(system, prompt::INSTRUCTION_CONTEXT);
        assert_eq!(
            user,
            format!("Please analyze the following article:\n\n{article}")
        );
    }

    #[test]
    fn submission_deserializes_from_the_wire_field_name() {
        let submission: Submission =
            serde_json::from_str(r#"{ "userText": "some article" }"#).unwrap();
        assert_eq!(submission.user_text.as_deref(), Some("some article"));

        let submission: Submission = serde_json::from_str("{}").unwrap();
        assert!(submission.user_text.is_none());
    }

    #[test]
    fn result_serializes_to_a_single_reply_field() {
        let value = serde_json::to_value(AnalysisResult {
            reply: "Mock analysis.".to_string(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "reply": "Mock analysis." }));
    }

    #[tokio::test]
    async fn backend_failure_maps_to_the_generic_outcome() {
        let (stub, calls, _) = Stub::new(Outcome::Failure);
        let analyzer = Analyzer::new(stub);

        let err = analyzer.analyze(&submission(&"x".repeat(150))).await.unwrap_err();

        assert!(matches!(err, Error::Completion(_)));
        assert_eq!(err.to_string(), "OpenAI API error");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
