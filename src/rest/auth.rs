//! Bearer token acquisition.
//!
//! [`OAuthAuthenticator`] runs the client-credentials exchange against
//! `/v2.01/oauth/token` and caches the token until shortly before expiry.
//! [`StaticTokenAuthenticator`] sends a token obtained elsewhere.

use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{ErrorDetails, SdkError, SdkResult};
use crate::rest::endpoint::oauth_token_url;

/// Tokens are renewed this long before the server-side expiry
const REFRESH_MARGIN: Duration = Duration::from_secs(30);

/// Upper bound on how long a token is cached, whatever `expires_in` says
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Source of the `Authorization` header value for API calls
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Full header value, e.g. `Bearer abc`
    async fn authorization(&self) -> SdkResult<String>;

    /// Drops any cached credential after the API rejected it
    async fn invalidate(&self) {}
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

struct CachedToken {
    header: String,
    refresh_at: Instant,
}

pub struct OAuthAuthenticator {
    http: reqwest::Client,
    token_url: Url,
    client_id: String,
    api_key: String,
    cached: Mutex<Option<CachedToken>>,
}

impl OAuthAuthenticator {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        client_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> SdkResult<Self> {
        Ok(Self {
            http,
            token_url: oauth_token_url(base_url)?,
            client_id: client_id.into(),
            api_key: api_key.into(),
            cached: Mutex::new(None),
        })
    }

    async fn fetch_token(&self) -> SdkResult<CachedToken> {
        debug!(url = %self.token_url, "Requesting OAuth token");

        let response = self
            .http
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.api_key))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SdkError::transport("oauth_token", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SdkError::transport("oauth_token", e))?;

        if !status.is_success() {
            let details = ErrorDetails::from_raw_body(&body);
            warn!(status = status.as_u16(), "OAuth token request rejected");
            return Err(SdkError::Authentication {
                message: details
                    .message
                    .unwrap_or_else(|| format!("token endpoint returned {}", status)),
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SdkError::Decode {
                operation: "oauth_token".into(),
                body,
                source: e,
            })?;

        let lifetime = Duration::from_secs(token.expires_in).min(MAX_TOKEN_LIFETIME);
        info!(expires_in = token.expires_in, "Obtained OAuth token");

        let now = Instant::now();
        Ok(CachedToken {
            header: format!("{} {}", token.token_type, token.access_token),
            refresh_at: now
                .checked_add(lifetime.saturating_sub(REFRESH_MARGIN))
                .unwrap_or(now),
        })
    }
}

#[async_trait]
impl Authenticator for OAuthAuthenticator {
    async fn authorization(&self) -> SdkResult<String> {
        // Held across the exchange so concurrent callers share one refresh
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.header.clone());
            }
            debug!("Cached OAuth token is about to expire");
        }

        let token = self.fetch_token().await?;
        let header = token.header.clone();
        *cached = Some(token);
        Ok(header)
    }

    async fn invalidate(&self) {
        self.cached.lock().await.take();
    }
}

impl fmt::Debug for OAuthAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthAuthenticator")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Pre-issued bearer token
pub struct StaticTokenAuthenticator {
    header: String,
}

impl StaticTokenAuthenticator {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            header: format!("Bearer {}", token.as_ref()),
        }
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authorization(&self) -> SdkResult<String> {
        Ok(self.header.clone())
    }
}

impl fmt::Debug for StaticTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticTokenAuthenticator(<redacted>)")
    }
}
