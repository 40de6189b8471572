//! On-disk cache of the last loaded quiz, dashboard listings and the last
//! confirmed login.
//!
//! Files live directly under the cache directory: `current-quiz.json`,
//! `cache_<listing>.json` and `auth.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use brainquiz_core::model::RawQuiz;
use brainquiz_core::traits::QuizSource;

use crate::api::{ApiClient, QuizListKind, UserProfile};

const CURRENT_QUIZ_FILE: &str = "current-quiz.json";
const AUTH_FILE: &str = "auth.json";

/// The user the backend last confirmed, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedAuth {
    pub user: UserProfile,
    pub validated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QuizCache {
    dir: PathBuf,
}

impl QuizCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn listing_path(&self, kind: QuizListKind) -> PathBuf {
        self.dir.join(format!("cache_{}.json", kind.key()))
    }

    async fn write<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create cache dir {}", self.dir.display()))?;
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("failed to write cache file {}", path.display()))?;
        Ok(())
    }

    async fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read cache file {}", path.display()))
            }
        };
        let value = serde_json::from_str(&content)
            .with_context(|| format!("corrupt cache file {}", path.display()))?;
        Ok(Some(value))
    }

    /// Remember the quiz that was just played.
    pub async fn store_quiz(&self, quiz: &RawQuiz) -> Result<()> {
        self.write(&self.dir.join(CURRENT_QUIZ_FILE), quiz).await
    }

    pub async fn load_quiz(&self) -> Result<Option<RawQuiz>> {
        self.read(&self.dir.join(CURRENT_QUIZ_FILE)).await
    }

    pub async fn store_listing(&self, kind: QuizListKind, quizzes: &[RawQuiz]) -> Result<()> {
        self.write(&self.listing_path(kind), quizzes).await
    }

    pub async fn load_listing(&self, kind: QuizListKind) -> Result<Option<Vec<RawQuiz>>> {
        self.read(&self.listing_path(kind)).await
    }

    pub async fn store_auth(&self, auth: &CachedAuth) -> Result<()> {
        self.write(&self.dir.join(AUTH_FILE), auth).await
    }

    pub async fn load_auth(&self) -> Result<Option<CachedAuth>> {
        self.read(&self.dir.join(AUTH_FILE)).await
    }

    /// Forget the cached login.
    pub async fn clear_auth(&self) -> Result<()> {
        self.remove(&self.dir.join(AUTH_FILE)).await
    }

    /// Drop a cached listing that no longer matches the backend.
    pub async fn clear_listing(&self, kind: QuizListKind) -> Result<()> {
        self.remove(&self.listing_path(kind)).await
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
        }
    }
}

/// Serves the last quiz stored in a [`QuizCache`].
#[derive(Debug, Clone)]
pub struct CacheSource {
    cache: QuizCache,
}

impl CacheSource {
    pub fn new(cache: QuizCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl QuizSource for CacheSource {
    fn name(&self) -> &str {
        "cache"
    }

    async fn fetch(&self) -> anyhow::Result<Option<RawQuiz>> {
        self.cache.load_quiz().await
    }
}

/// A dashboard listing and whether it came from the cache.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub quizzes: Vec<RawQuiz>,
    pub from_cache: bool,
}

/// Fetch a listing live, refreshing the cache, or fall back to the cached copy.
///
/// Never fails: with no backend and no cached copy the listing is empty.
pub async fn list_with_fallback(
    client: Option<&ApiClient>,
    cache: &QuizCache,
    kind: QuizListKind,
) -> Listing {
    if let Some(client) = client {
        match client.list(kind).await {
            Ok(quizzes) => {
                if let Err(e) = cache.store_listing(kind, &quizzes).await {
                    tracing::warn!("failed to cache {kind} listing: {e:#}");
                }
                return Listing {
                    quizzes,
                    from_cache: false,
                };
            }
            Err(e) => tracing::warn!("failed to load {kind} listing, using local cache: {e}"),
        }
    }

    let quizzes = match cache.load_listing(kind).await {
        Ok(cached) => cached.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("ignoring unreadable {kind} cache: {e:#}");
            Vec::new()
        }
    };
    Listing {
        quizzes,
        from_cache: true,
    }
}
