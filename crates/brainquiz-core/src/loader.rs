//! Ordered fallback across quiz data sources.
//!
//! Sources are tried in the order given. The first one that yields a quiz
//! passing validation wins; every attempt is recorded so callers can tell
//! where a session came from and why earlier sources were skipped.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::QuizSession;
use crate::traits::QuizSource;

/// What happened when one source was tried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "kebab-case")]
pub enum AttemptOutcome {
    Loaded,
    Empty,
    Invalid(String),
    Failed(String),
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Loaded => write!(f, "loaded"),
            AttemptOutcome::Empty => write!(f, "nothing available"),
            AttemptOutcome::Invalid(reason) => write!(f, "invalid quiz: {reason}"),
            AttemptOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAttempt {
    pub source: String,
    pub outcome: AttemptOutcome,
}

/// Where a loaded session came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub source: String,
    pub attempts: Vec<SourceAttempt>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no quiz sources configured")]
    NoSources,

    #[error("no quiz found after trying {}", summarize(.attempts))]
    Exhausted { attempts: Vec<SourceAttempt> },
}

fn summarize(attempts: &[SourceAttempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("{} ({})", a.source, a.outcome))
        .collect::<Vec<_>>()
        .join(", ")
}

/// An ordered list of quiz sources.
#[derive(Default, Clone)]
pub struct SourceChain {
    sources: Vec<Arc<dyn QuizSource>>,
    seed: Option<u64>,
}

impl SourceChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; it is tried after every source already added.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn QuizSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn push(&mut self, source: Arc<dyn QuizSource>) {
        self.sources.push(source);
    }

    /// Shuffle loaded sessions deterministically.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Try every source in order and start a session from the first valid quiz.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Exhausted` with every attempt when no source
    /// produced a playable quiz.
    pub async fn load(&self) -> Result<(QuizSession, LoadReport), LoadError> {
        if self.sources.is_empty() {
            return Err(LoadError::NoSources);
        }

        let mut attempts = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let name = source.name().to_string();
            tracing::debug!(source = %name, "trying quiz source");

            let outcome = match source.fetch().await {
                Ok(Some(raw)) => {
                    let session = match self.seed {
                        Some(seed) => QuizSession::with_seed(raw, seed),
                        None => QuizSession::new(raw),
                    };
                    match session {
                        Ok(session) => {
                            tracing::info!(
                                source = %name,
                                title = %session.quiz().title,
                                questions = session.quiz().len(),
                                "quiz loaded"
                            );
                            attempts.push(SourceAttempt {
                                source: name.clone(),
                                outcome: AttemptOutcome::Loaded,
                            });
                            return Ok((
                                session,
                                LoadReport {
                                    source: name,
                                    attempts,
                                },
                            ));
                        }
                        Err(e) => AttemptOutcome::Invalid(e.to_string()),
                    }
                }
                Ok(None) => AttemptOutcome::Empty,
                Err(e) => AttemptOutcome::Failed(format!("{e:#}")),
            };

            tracing::warn!(source = %name, "skipping quiz source: {outcome}");
            attempts.push(SourceAttempt {
                source: name,
                outcome,
            });
        }

        Err(LoadError::Exhausted { attempts })
    }
}
