//! Session checks with a short offline grace window.
//!
//! A successful token validation is remembered in the [`QuizCache`]. When the
//! backend later cannot be reached, that cached user is accepted for as long
//! as the last confirmation is younger than the grace window. A rejected
//! token clears the cached login.

use std::time::Duration;

use chrono::Utc;
use tracing::instrument;

use crate::api::{ApiClient, UserProfile};
use crate::cache::{CachedAuth, QuizCache};
use crate::error::SourceError;

pub const DEFAULT_OFFLINE_GRACE_SECS: u64 = 300;

/// Outcome of a successful session check.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCheck {
    pub user: UserProfile,
    /// True when the backend was unreachable and the cached login was used.
    pub offline: bool,
}

/// Validate the token, falling back to the cached login on transient failures.
#[instrument(skip_all)]
pub async fn check_session(
    client: &ApiClient,
    cache: &QuizCache,
    grace: Duration,
) -> Result<SessionCheck, SourceError> {
    match client.validate_token().await {
        Ok(user) => {
            let auth = CachedAuth {
                user: user.clone(),
                validated_at: Utc::now(),
            };
            if let Err(e) = cache.store_auth(&auth).await {
                tracing::warn!("failed to cache login: {e:#}");
            }
            Ok(SessionCheck {
                user,
                offline: false,
            })
        }
        Err(e) if e.is_permanent() => {
            if let Err(clear) = cache.clear_auth().await {
                tracing::warn!("failed to clear cached login: {clear:#}");
            }
            Err(e)
        }
        Err(e) => {
            let cached = match cache.load_auth().await {
                Ok(cached) => cached,
                Err(read) => {
                    tracing::warn!("ignoring unreadable cached login: {read:#}");
                    None
                }
            };
            match cached {
                Some(auth) if within_grace(&auth, grace) => {
                    tracing::warn!("token validation failed, using cached login: {e}");
                    Ok(SessionCheck {
                        user: auth.user,
                        offline: true,
                    })
                }
                _ => Err(e),
            }
        }
    }
}

fn within_grace(auth: &CachedAuth, grace: Duration) -> bool {
    let age = Utc::now().signed_duration_since(auth.validated_at);
    match age.to_std() {
        Ok(age) => age < grace,
        // Timestamp in the future: clock skew, treat as fresh.
        Err(_) => true,
    }
}
