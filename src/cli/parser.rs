//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ApiEnvironment;
use crate::models::CurrencyIso;
use crate::rest::{IdempotencyKey, MAX_PER_PAGE};

/// Command-line client for the Mangopay REST API
#[derive(Parser, Debug)]
#[command(name = "mangopay")]
#[command(about = "Command-line client for the Mangopay REST API")]
#[command(long_about = "
mangopay talks to the Mangopay REST API with the credentials found in the
layered configuration (config/default.toml, config/{env}.toml,
config/local.toml, MANGOPAY_* variables). Every command prints the
resource it received as pretty JSON on stdout; logs go to stderr.

EXAMPLES:
    # Check which credentials and host would be used
    mangopay check-config

    # Use a specific configuration file against production
    mangopay --config /etc/mangopay/prod.toml --env production check-config

    # Create a settlement and upload its CSV file in one go
    mangopay settlements upload --file ./settlement.csv

    # Read the validation report of a settlement, 50 lines per page
    mangopay settlements validations stl_123 --per-page 50

    # Current EUR to GBP rate
    mangopay conversions rate EUR GBP

    # Replay the stored outcome of an idempotent request
    mangopay responses get 2f1c6b0e-4a1d-4c77-9a45-4bd1f0b6d3a2
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load this single TOML file instead of the layered configuration
    /// directory. The file must exist and be readable.
    ///
    /// Example: --config /etc/mangopay/sandbox.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override the API environment
    ///
    /// Selects which `{env}.toml` layer is read and which API host is used
    /// when no base URL override is configured.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Logs every request at debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the configuration, then print a redacted summary
    CheckConfig,

    /// Pay-in intent settlement files
    #[command(subcommand)]
    Settlements(SettlementCommands),

    /// Currency conversions and quotes
    #[command(subcommand)]
    Conversions(ConversionCommands),

    /// Users and their SCA status
    #[command(subcommand)]
    Users(UserCommands),

    /// Pay-ins
    #[command(subcommand)]
    PayIns(GetCommand),

    /// Pay-outs
    #[command(subcommand)]
    PayOuts(GetCommand),

    /// Stored outcomes of idempotent requests
    #[command(subcommand)]
    Responses(ResponseCommands),
}

#[derive(Subcommand, Debug)]
pub enum SettlementCommands {
    /// Create a settlement and print its pre-signed upload URL
    UploadUrl {
        /// Name of the CSV file that will be uploaded
        #[arg(long, value_name = "NAME")]
        file_name: String,

        #[command(flatten)]
        idempotency: IdempotencyArgs,
    },

    /// Fetch a settlement
    Get {
        /// Settlement id
        id: String,
    },

    /// Issue a fresh upload URL for an existing settlement
    NewUploadUrl {
        /// Settlement id
        id: String,

        /// Name of the CSV file that will be uploaded
        #[arg(long, value_name = "NAME")]
        file_name: String,
    },

    /// Create a settlement and upload a CSV file to it
    ///
    /// Examples:
    ///   mangopay settlements upload --file settlement.csv
    ///   mangopay settlements upload --file out/2026-10.csv --file-name october.csv
    Upload {
        /// Local CSV file to upload
        #[arg(long, value_name = "PATH", value_parser = super::validation::validate_upload_file_path)]
        file: PathBuf,

        /// File name declared to the API (defaults to the file's own name)
        #[arg(long, value_name = "NAME")]
        file_name: Option<String>,

        #[command(flatten)]
        idempotency: IdempotencyArgs,
    },

    /// Page through the validation report of an uploaded settlement
    Validations {
        /// Settlement id
        id: String,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConversionCommands {
    /// Current rate between two currencies
    Rate {
        /// Currency debited, e.g. EUR
        #[arg(value_parser = super::validation::validate_currency)]
        debited: CurrencyIso,

        /// Currency credited, e.g. GBP
        #[arg(value_parser = super::validation::validate_currency)]
        credited: CurrencyIso,
    },

    /// Fetch a conversion
    Get {
        /// Conversion id
        id: String,
    },

    /// Fetch a conversion quote
    Quote {
        /// Quote id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Fetch a natural or legal user
    Get {
        /// User id
        id: String,
    },

    /// SCA enrollment and consent state of a user
    ScaStatus {
        /// User id
        id: String,
    },
}

/// Single-resource lookup shared by several resource families
#[derive(Subcommand, Debug)]
pub enum GetCommand {
    /// Fetch a resource by id
    Get {
        /// Resource id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResponseCommands {
    /// Print the stored outcome of the request sent with KEY
    Get {
        /// Idempotency key used on the original request
        #[arg(value_parser = super::validation::validate_idempotency_key)]
        key: IdempotencyKey,
    },
}

#[derive(Args, Debug, Default)]
pub struct IdempotencyArgs {
    /// Idempotency key (16 to 36 characters of [A-Za-z0-9-])
    ///
    /// Replaying a command with the same key returns the first outcome
    /// instead of creating a second resource.
    #[arg(long, value_name = "KEY", value_parser = super::validation::validate_idempotency_key)]
    pub idempotency_key: Option<IdempotencyKey>,
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = super::validation::validate_page)]
    pub page: u32,

    /// Items per page
    #[arg(long, default_value_t = 10, value_parser = super::validation::validate_per_page)]
    pub per_page: u32,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "sandbox", alias = "test")]
    Sandbox,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for ApiEnvironment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Sandbox => ApiEnvironment::Sandbox,
            Environment::Production => ApiEnvironment::Production,
        }
    }
}

impl Cli {
    /// Get detailed help for validation errors
    pub fn get_validation_help() -> String {
        format!(
            r#"
Common validation errors and solutions:

Configuration file validation:
  - File must exist and be readable
  - File must be in TOML format
  - Example: --config /path/to/config.toml

Idempotency keys:
  - 16 to 36 characters, letters, digits and '-' only
  - Example: --idempotency-key 2f1c6b0e-4a1d-4c77-9a45-4bd1f0b6d3a2

Pagination:
  - --page starts at 1
  - --per-page must be between 1 and {}

Currencies:
  - ISO 4217 codes supported by the API, e.g. EUR, GBP, USD

For more help, use: mangopay help <subcommand>
"#,
            MAX_PER_PAGE
        )
    }
}
