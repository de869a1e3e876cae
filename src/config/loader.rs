//! Configuration loader for the Mangopay client
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::ApiEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "MANGOPAY_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "MANGOPAY_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "MANGOPAY";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base configuration (required only when `MANGOPAY_CONFIG_DIR` is set)
/// 2. `{environment}.toml` - Environment-specific configuration (`sandbox.toml`, `production.toml`)
/// 3. `local.toml` - Local overrides, not committed to version control
/// 4. `MANGOPAY_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    /// Whether the directory was chosen explicitly rather than defaulted
    config_dir_explicit: bool,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    environment: ApiEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if both `MANGOPAY_CONFIG_DIR` and `MANGOPAY_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let explicit_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && explicit_dir.is_some() {
            return Err(ConfigError::mutual_exclusivity(
                "MANGOPAY_CONFIG_DIR and MANGOPAY_CONFIG_FILE cannot both be set. \
                 Use MANGOPAY_CONFIG_DIR for layered configuration or \
                 MANGOPAY_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir_explicit: explicit_dir.is_some(),
            config_dir: explicit_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: ApiEnvironment::from_env(),
        })
    }

    /// Loader reading a single file, as used by the `--config` CLI flag
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_dir_explicit: false,
            config_file: Some(path.into()),
            environment: ApiEnvironment::from_env(),
        }
    }

    /// Force an environment instead of reading `MANGOPAY_ENV`
    pub fn with_environment(mut self, environment: ApiEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> ApiEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a required configuration file is not found
    /// - configuration parsing fails
    /// - configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings = self.load_unvalidated()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration without running validation
    pub fn load_unvalidated(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder()
            .set_default("client.environment", self.environment.as_str())?;

        let builder = if let Some(ref config_file) = self.config_file {
            Self::add_file_source(builder, config_file, true)?
        } else {
            self.build_layered_config(builder)?
        };

        // MANGOPAY_CLIENT__API_KEY -> client.api_key
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(&self, builder: Builder) -> Result<Builder, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, self.config_dir_explicit)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    fn add_file_source(
        builder: Builder,
        path: &Path,
        required: bool,
    ) -> Result<Builder, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }

    fn add_env_source(builder: Builder) -> Builder {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_dir_explicit: false,
            config_file: None,
            environment: ApiEnvironment::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching process environment variables must not interleave
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Restores touched environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }

        fn clear_mangopay_vars(&mut self) {
            for key in [
                "MANGOPAY_CONFIG_DIR",
                "MANGOPAY_CONFIG_FILE",
                "MANGOPAY_ENV",
                "MANGOPAY_CLIENT__CLIENT_ID",
                "MANGOPAY_CLIENT__API_KEY",
            ] {
                self.remove(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const DEFAULT_TOML: &str = r#"
[client]
client_id = "platform-a"
api_key = "key-a"
timeout_secs = 20

[logger]
level = "info"
"#;

    #[test]
    fn test_config_loader_new_default() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_mangopay_vars();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(!loader.config_dir_explicit);
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), ApiEnvironment::Sandbox);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_mangopay_vars();
        env.set("MANGOPAY_CONFIG_DIR", "/custom/config");
        env.set("MANGOPAY_CONFIG_FILE", "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("MANGOPAY_CONFIG_DIR"));
                assert!(msg.contains("MANGOPAY_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_dir_requires_default_toml() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_mangopay_vars();

        let temp_dir = setup_config_dir(&[]);
        env.set("MANGOPAY_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let loader = ConfigLoader::new().expect("Should create loader");
        match loader.load() {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_layered_with_environment_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_mangopay_vars();

        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            (
                "production.toml",
                "[client]\napi_key = \"live-key\"\n",
            ),
            ("local.toml", "[client]\ntimeout_secs = 5\n"),
        ]);
        env.set("MANGOPAY_CONFIG_DIR", temp_dir.path().to_str().unwrap());
        env.set("MANGOPAY_ENV", "production");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.client.client_id, "platform-a");
        assert_eq!(settings.client.api_key, "live-key");
        assert_eq!(settings.client.timeout_secs, 5);
        assert_eq!(settings.client.environment, ApiEnvironment::Production);
    }

    #[test]
    fn test_env_vars_override_files() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_mangopay_vars();

        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.set("MANGOPAY_CONFIG_DIR", temp_dir.path().to_str().unwrap());
        env.set("MANGOPAY_CLIENT__API_KEY", "from-env");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.client.api_key, "from-env");
        assert_eq!(settings.client.timeout_secs, 20);
    }

    #[test]
    fn test_single_file_mode() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_mangopay_vars();

        let temp_dir = setup_config_dir(&[("mangopay.toml", DEFAULT_TOML)]);
        let loader = ConfigLoader::from_file(temp_dir.path().join("mangopay.toml"));

        let settings = loader.load().unwrap();
        assert_eq!(settings.client.client_id, "platform-a");
        assert_eq!(settings.client.environment, ApiEnvironment::Sandbox);
    }

    #[test]
    fn test_single_file_missing() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let loader = ConfigLoader::from_file("/definitely/not/here.toml");
        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_mangopay_vars();

        let temp_dir = setup_config_dir(&[("default.toml", "[client]\napi_key = \"k\"\n")]);
        env.set("MANGOPAY_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let loader = ConfigLoader::new().unwrap();
        assert!(loader.load_unvalidated().is_ok());
        match loader.load() {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "client.client_id"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
