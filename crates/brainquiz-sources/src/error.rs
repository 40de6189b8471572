//! Source error types.

use thiserror::Error;

/// Errors that can occur when talking to the quiz backend.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backend rejected the token (HTTP 401/403).
    #[error("not authorized: {0}")]
    Unauthorized(String),

    /// The backend returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not what the backend is expected to send.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// No backend is configured.
    #[error("no API configured (set [api] base_url or BRAINQUIZ_API_URL)")]
    NotConfigured,
}

impl SourceError {
    /// Errors that retrying cannot fix.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            SourceError::Unauthorized(_) | SourceError::NotConfigured
        )
    }
}
