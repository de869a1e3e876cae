//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.
//! Every handler returns the JSON document the binary prints.

pub mod check_config;
pub mod conversions;
pub mod resources;
pub mod settlements;

pub use check_config::CheckConfigHandler;
pub use conversions::ConversionCommandHandler;
pub use resources::ResourceCommandHandler;
pub use settlements::SettlementCommandHandler;

use serde::Serialize;
use serde_json::Value;

pub(crate) fn to_json<T: Serialize>(value: &T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}
