//! brainquiz-sources: Quiz data sources.
//!
//! Implements the `QuizSource` trait for the backend API, local quiz files and
//! the on-disk cache, plus the backend client used for dashboard listings and
//! actions, result submission and token validation.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod file;
pub mod mock;

pub use api::{
    ApiClient, ApiEndpoint, ApiQuizSource, QuizAction, QuizListKind, ResultSubmission, UserProfile,
};
pub use auth::{check_session, SessionCheck};
pub use cache::{list_with_fallback, CacheSource, CachedAuth, Listing, QuizCache};
pub use config::{build_chain, load_config, ApiConfig, BrainquizConfig, LoadRequest, SourceKind};
pub use error::SourceError;
pub use file::FileSource;
pub use mock::MockSource;
