//! check-config command handler
//!
//! Validates the merged configuration and reports what would be used,
//! without contacting the API.

use serde_json::{Value, json};

use crate::config::settings::Settings;
use crate::rest::client::default_user_agent;

pub struct CheckConfigHandler {
    config: Settings,
}

impl CheckConfigHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Summary with secrets left out
    pub fn execute(&self) -> anyhow::Result<Value> {
        self.config.validate()?;

        let client = &self.config.client;
        let auth = if client.access_token.is_some() {
            "static_token"
        } else {
            "oauth_client_credentials"
        };

        Ok(json!({
            "valid": true,
            "client": {
                "client_id": client.client_id,
                "environment": client.environment.as_str(),
                "base_url": client.base_url(),
                "authentication": auth,
                "timeout_secs": client.timeout_secs,
                "connect_timeout_secs": client.connect_timeout_secs,
                "user_agent": client.user_agent.clone().unwrap_or_else(default_user_agent),
            },
            "logger": {
                "level": self.config.logger.level,
                "console": self.config.logger.console.enabled,
                "file": self.config.logger.file.enabled.then(|| self.config.logger.file.path.clone()),
            }
        }))
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
