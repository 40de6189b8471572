//! Local quiz files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;

use brainquiz_core::model::RawQuiz;
use brainquiz_core::normalize::parse_raw_quiz;
use brainquiz_core::traits::QuizSource;

/// Loads a quiz from a JSON file, either bare or wrapped as `{ "quiz": … }`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuizSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> anyhow::Result<Option<RawQuiz>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let raw = parse_raw_quiz(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(Some(raw))
    }
}
