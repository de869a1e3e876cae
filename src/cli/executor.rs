//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use serde_json::Value;

use super::handlers::{
    CheckConfigHandler, ConversionCommandHandler, ResourceCommandHandler, SettlementCommandHandler,
};
use super::parser::{Cli, Commands};
use crate::api::MangoPayApi;
use crate::config::settings::Settings;

/// Execute a CLI command with the given settings
///
/// `check-config` never touches the network; every other command builds a
/// [`MangoPayApi`] from `settings.client` first.
///
/// # Returns
/// The JSON document to print on stdout
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<Value> {
    let api = || MangoPayApi::new(settings.client.clone());

    match &cli.command {
        Commands::CheckConfig => CheckConfigHandler::new(settings.clone()).execute(),
        Commands::Settlements(command) => SettlementCommandHandler::new(api()?).execute(command).await,
        Commands::Conversions(command) => ConversionCommandHandler::new(api()?).execute(command).await,
        Commands::Users(command) => ResourceCommandHandler::new(api()?).users(command).await,
        Commands::PayIns(command) => ResourceCommandHandler::new(api()?).pay_ins(command).await,
        Commands::PayOuts(command) => ResourceCommandHandler::new(api()?).pay_outs(command).await,
        Commands::Responses(command) => ResourceCommandHandler::new(api()?).responses(command).await,
    }
}
