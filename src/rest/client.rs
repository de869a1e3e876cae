use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};

/// Default User-Agent sent when the configuration does not override it
pub fn default_user_agent() -> String {
    format!("mangopay-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Builds the HTTP client shared by every resource client of one
/// [`crate::MangoPayApi`].
///
/// # Features
/// - **Connection pooling**: one pool per configured API, reused across calls
/// - **Compression**: gzip, deflate, brotli and zstd responses
/// - **Timeouts**: whole-request and connect timeouts from [`ClientConfig`]
/// - **Security**: Rustls for TLS, no OpenSSL dependency
///
/// There is no retry layer; a timed-out request surfaces as
/// [`SdkError::Transport`].
pub fn build_http_client(config: &ClientConfig) -> SdkResult<reqwest::Client> {
    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(default_user_agent);

    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(user_agent)
        .build()
        .map_err(|e| SdkError::Configuration {
            key: "client".into(),
            source: e.into(),
        })
}
