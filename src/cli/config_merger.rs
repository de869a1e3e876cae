//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use std::path::Path;

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ApiEnvironment, ConfigLoader, settings::Settings};

/// Applies CLI flags on top of file-based configuration
///
/// CLI arguments have the highest priority, above `MANGOPAY_*` variables.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration without validating it
    ///
    /// Validation runs after the CLI overrides are applied, so a flag can
    /// fix a value the files got wrong.
    ///
    /// # Arguments
    /// * `config_path` - Single file to read instead of the layered directory
    /// * `environment` - Environment forced by `--env`
    pub fn from_config_path(
        config_path: Option<&Path>,
        environment: Option<ApiEnvironment>,
    ) -> Result<Self, ConfigError> {
        let loader = match config_path {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };
        let loader = match environment {
            Some(environment) => loader.with_environment(environment),
            None => loader,
        };

        Ok(Self::new(loader.load_unvalidated()?))
    }

    /// Merge CLI arguments with the base configuration and validate the result
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(env) = cli.env {
            config.client.environment = env.into();
        }

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        config.validate()?;

        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
