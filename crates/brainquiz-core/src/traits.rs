//! Data-source trait definitions.
//!
//! Implemented by the `brainquiz-sources` crate (backend API, local files,
//! on-disk cache) and by test doubles.

use async_trait::async_trait;

use crate::model::RawQuiz;

/// A named place a quiz can be loaded from.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Human-readable source name (e.g. "api:current"), recorded on success.
    fn name(&self) -> &str;

    /// Fetch a raw quiz.
    ///
    /// `Ok(None)` means the source is reachable but has nothing to offer;
    /// errors are reserved for failures worth logging.
    async fn fetch(&self) -> anyhow::Result<Option<RawQuiz>>;
}
