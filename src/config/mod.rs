//! Configuration management for the Mangopay client
//!
//! This module provides layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//! - Sandbox and production API environments
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local overrides (not committed to version control)
//! 4. `MANGOPAY_*` environment variables
//!
//! Library users who do not want files can build a [`ClientConfig`] directly.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::ApiEnvironment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ClientConfig, ConsoleSettings, FileSettings, LoggerSettings, Settings};
