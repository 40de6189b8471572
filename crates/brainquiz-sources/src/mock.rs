//! Mock source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use brainquiz_core::model::RawQuiz;
use brainquiz_core::traits::QuizSource;

enum Response {
    Quiz(RawQuiz),
    Nothing,
    Failure(String),
}

/// A quiz source with a canned response, for exercising source chains
/// without a backend.
pub struct MockSource {
    name: String,
    response: Response,
    call_count: AtomicU32,
}

impl MockSource {
    /// Always yields `quiz`.
    pub fn with_quiz(name: &str, quiz: RawQuiz) -> Self {
        Self::build(name, Response::Quiz(quiz))
    }

    /// Reachable but has nothing to offer.
    pub fn empty(name: &str) -> Self {
        Self::build(name, Response::Nothing)
    }

    /// Always fails with `message`.
    pub fn failing(name: &str, message: &str) -> Self {
        Self::build(name, Response::Failure(message.to_string()))
    }

    fn build(name: &str, response: Response) -> Self {
        Self {
            name: name.to_string(),
            response,
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of times `fetch` was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QuizSource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> anyhow::Result<Option<RawQuiz>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.response {
            Response::Quiz(quiz) => Ok(Some(quiz.clone())),
            Response::Nothing => Ok(None),
            Response::Failure(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}
