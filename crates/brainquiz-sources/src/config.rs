//! Configuration and source-chain factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use brainquiz_core::loader::SourceChain;

use crate::api::{ApiClient, ApiEndpoint, ApiQuizSource, DEFAULT_TIMEOUT_SECS};
use crate::auth::DEFAULT_OFFLINE_GRACE_SECS;
use crate::cache::{CacheSource, QuizCache};
use crate::file::FileSource;

/// Backend connection settings.
///
/// Note: Custom Debug impl masks the token to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// One entry of the ordered source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// `/api/quiz/{id}`, only when an id was requested.
    ById,
    /// `/api/quiz-atual`.
    Current,
    /// `/api/quiz-temp`.
    Temporary,
    /// A local quiz file, only when one was given.
    File,
    /// The last quiz stored in the on-disk cache.
    Cache,
}

/// Top-level brainquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainquizConfig {
    /// Backend settings; without them the API sources are skipped.
    #[serde(default)]
    pub api: Option<ApiConfig>,
    /// Max attempts when validating the token.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
    /// Base delay between attempts in milliseconds, multiplied by the attempt number.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
    /// How long a confirmed login stays usable while the backend is unreachable.
    #[serde(default = "default_offline_grace")]
    pub offline_grace_secs: u64,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Output directory for session records.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Order in which quiz sources are tried.
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceKind>,
}

fn default_retries() -> u32 {
    3
}
fn default_retry_delay() -> u64 {
    1000
}
fn default_offline_grace() -> u64 {
    DEFAULT_OFFLINE_GRACE_SECS
}
fn default_cache_dir() -> PathBuf {
    PathBuf::from("./.brainquiz-cache")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./brainquiz-results")
}
fn default_sources() -> Vec<SourceKind> {
    vec![
        SourceKind::ById,
        SourceKind::Current,
        SourceKind::Temporary,
        SourceKind::File,
        SourceKind::Cache,
    ]
}

impl Default for BrainquizConfig {
    fn default() -> Self {
        Self {
            api: None,
            max_retries: default_retries(),
            retry_delay_ms: default_retry_delay(),
            offline_grace_secs: default_offline_grace(),
            cache_dir: default_cache_dir(),
            output_dir: default_output_dir(),
            sources: default_sources(),
        }
    }
}

impl BrainquizConfig {
    pub fn cache(&self) -> QuizCache {
        QuizCache::new(&self.cache_dir)
    }

    pub fn offline_grace(&self) -> Duration {
        Duration::from_secs(self.offline_grace_secs)
    }

    /// Build the backend client, if a backend is configured.
    pub fn api_client(&self) -> Result<Option<ApiClient>> {
        let Some(api) = &self.api else {
            return Ok(None);
        };
        let client = ApiClient::new(&api.base_url, api.token.clone(), api.timeout_secs)?
            .with_retry(
                self.max_retries,
                Duration::from_millis(self.retry_delay_ms),
            );
        Ok(Some(client))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    resolve_vars_with(s, |name| std::env::var(name).ok())
}

/// Substitute `${NAME}` references using `lookup`. Substituted values are not
/// scanned again, so a value containing `${` is kept literally.
fn resolve_vars_with(s: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&lookup(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Apply `BRAINQUIZ_API_URL` / `BRAINQUIZ_TOKEN` overrides from `lookup`.
fn apply_env_overrides(config: &mut BrainquizConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("BRAINQUIZ_API_URL").filter(|u| !u.is_empty()) {
        match &mut config.api {
            Some(api) => api.base_url = url,
            None => {
                config.api = Some(ApiConfig {
                    base_url: url,
                    token: None,
                    timeout_secs: default_timeout(),
                })
            }
        }
    }

    if let Some(token) = lookup("BRAINQUIZ_TOKEN") {
        match &mut config.api {
            Some(api) => api.token = Some(token),
            None => tracing::debug!("BRAINQUIZ_TOKEN set but no API configured; ignoring"),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `brainquiz.toml` in the current directory
/// 2. `~/.config/brainquiz/config.toml`
///
/// Environment variable overrides: `BRAINQUIZ_API_URL`, `BRAINQUIZ_TOKEN`.
pub fn load_config() -> Result<BrainquizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<BrainquizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("brainquiz.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => BrainquizConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    if let Some(api) = &mut config.api {
        api.base_url = resolve_env_vars(&api.base_url);
        api.token = api
            .token
            .as_deref()
            .map(resolve_env_vars)
            .filter(|t| !t.is_empty());
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<BrainquizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str::<BrainquizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("brainquiz"))
}

/// What the player asked to load.
#[derive(Debug, Clone, Default)]
pub struct LoadRequest {
    pub quiz_id: Option<String>,
    pub file: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Build the ordered source chain for a load request.
///
/// Entries whose input is missing (no id requested, no file given, no backend
/// configured) are left out.
pub fn build_chain(config: &BrainquizConfig, request: &LoadRequest) -> Result<SourceChain> {
    let client = config.api_client()?.map(Arc::new);
    let mut chain = SourceChain::new().with_seed(request.seed);

    for kind in &config.sources {
        match (kind, &client) {
            (SourceKind::ById, Some(client)) => {
                if let Some(id) = &request.quiz_id {
                    chain.push(Arc::new(ApiQuizSource::new(
                        client.clone(),
                        ApiEndpoint::ById(id.clone()),
                    )));
                }
            }
            (SourceKind::Current, Some(client)) => chain.push(Arc::new(ApiQuizSource::new(
                client.clone(),
                ApiEndpoint::Current,
            ))),
            (SourceKind::Temporary, Some(client)) => chain.push(Arc::new(ApiQuizSource::new(
                client.clone(),
                ApiEndpoint::Temporary,
            ))),
            (SourceKind::ById | SourceKind::Current | SourceKind::Temporary, None) => {
                tracing::debug!(?kind, "no API configured, skipping source");
            }
            (SourceKind::File, _) => {
                if let Some(file) = &request.file {
                    chain.push(Arc::new(FileSource::new(file)));
                }
            }
            (SourceKind::Cache, _) => chain.push(Arc::new(CacheSource::new(config.cache()))),
        }
    }

    tracing::debug!(sources = ?chain.source_names(), "built source chain");
    Ok(chain)
}
