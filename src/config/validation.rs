//! Configuration validation logic
//!
//! Checks that configuration values are usable before any request is sent.

use crate::config::error::ConfigError;
use crate::config::settings::{ClientConfig, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ClientConfig {
    /// Validate client configuration
    ///
    /// # Validation Rules
    /// - Client id must not be empty
    /// - Either an API key or a static access token must be present
    /// - The base URL override, if any, must be an absolute http(s) URL
    /// - Timeouts must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::validation(
                "client.client_id",
                "Client id is required. Set client.client_id or MANGOPAY_CLIENT__CLIENT_ID.",
            ));
        }

        let has_token = self
            .access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if self.api_key.trim().is_empty() && !has_token {
            return Err(ConfigError::validation(
                "client.api_key",
                "An API key or an access token is required.",
            ));
        }

        if let Some(base_url) = &self.base_url {
            let url = reqwest::Url::parse(base_url).map_err(|e| ConfigError::ValidationError {
                field: "client.base_url".to_string(),
                message: format!("Invalid base URL '{}': {}", base_url, e),
            })?;
            if url.scheme() != "https" && url.scheme() != "http" {
                return Err(ConfigError::validation(
                    "client.base_url",
                    "Base URL must use http or https.",
                ));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::validation(
                "client.timeout_secs",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::validation(
                "client.connect_timeout_secs",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !VALID_LOG_FORMATS.contains(&self.file.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.file.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "Log file path cannot be empty when file output is enabled.",
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.client.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_client() -> ClientConfig {
        ClientConfig::new("my-platform", "api-key")
    }

    #[test]
    fn test_valid_client_config() {
        assert!(valid_client().validate().is_ok());
    }

    #[test]
    fn test_missing_client_id() {
        let config = ClientConfig::new("  ", "api-key");
        match config.validate() {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "client.client_id"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_access_token_replaces_api_key() {
        let missing = ClientConfig::new("my-platform", "");
        assert!(missing.validate().is_err());

        let with_token = ClientConfig::new("my-platform", "").with_access_token("token");
        assert!(with_token.validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let relative = valid_client().with_base_url("not a url");
        assert!(relative.validate().is_err());

        let ftp = valid_client().with_base_url("ftp://example.com");
        match ftp.validate() {
            Err(ConfigError::ValidationError { field, message }) => {
                assert_eq!(field, "client.base_url");
                assert!(message.contains("http"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_timeouts() {
        assert!(valid_client().with_timeouts(0, 10).validate().is_err());
        assert!(valid_client().with_timeouts(10, 0).validate().is_err());
    }

    #[test]
    fn test_logger_validation() {
        let mut logger = LoggerSettings::default();
        assert!(logger.validate().is_ok());

        logger.level = "verbose".to_string();
        assert!(logger.validate().is_err());

        logger.level = "INFO".to_string();
        logger.console.enabled = false;
        assert!(logger.validate().is_err());

        logger.file.enabled = true;
        assert!(logger.validate().is_ok());

        logger.file.path = String::new();
        assert!(logger.validate().is_err());
    }

    #[test]
    fn test_settings_validate_checks_client_first() {
        let settings = Settings::default();
        match settings.validate() {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "client.client_id"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
