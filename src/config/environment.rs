//! Mangopay API environments

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::config::error::ConfigError;

/// Remote API environment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    /// Sandbox environment, used for integration and testing
    #[default]
    Sandbox,
    /// Live environment, moves real funds
    Production,
}

impl ApiEnvironment {
    /// Environment variable name for reading the current environment
    pub const ENV_VAR: &'static str = "MANGOPAY_ENV";

    /// Read the environment from the `MANGOPAY_ENV` environment variable
    ///
    /// Returns `Sandbox` if the variable is not set or cannot be parsed.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiEnvironment::Sandbox => "sandbox",
            ApiEnvironment::Production => "production",
        }
    }

    /// Base URL of the public API host for this environment
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Sandbox => "https://api.sandbox.mangopay.com",
            ApiEnvironment::Production => "https://api.mangopay.com",
        }
    }
}

impl FromStr for ApiEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sandbox" | "test" => Ok(ApiEnvironment::Sandbox),
            "production" | "prod" | "live" => Ok(ApiEnvironment::Production),
            _ => Err(ConfigError::EnvVarError(format!(
                "Invalid environment '{}'. Valid values are: sandbox, production",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
