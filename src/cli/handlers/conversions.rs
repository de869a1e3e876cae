//! conversions command handler

use serde_json::Value;

use super::to_json;
use crate::api::MangoPayApi;
use crate::cli::parser::ConversionCommands;

pub struct ConversionCommandHandler {
    api: MangoPayApi,
}

impl ConversionCommandHandler {
    pub fn new(api: MangoPayApi) -> Self {
        Self { api }
    }

    pub async fn execute(&self, command: &ConversionCommands) -> anyhow::Result<Value> {
        let conversions = self.api.conversions();

        match command {
            ConversionCommands::Rate { debited, credited } => {
                to_json(&conversions.get_conversion_rate(*debited, *credited).await?)
            }
            ConversionCommands::Get { id } => to_json(&conversions.get_conversion(id).await?),
            ConversionCommands::Quote { id } => to_json(&conversions.get_conversion_quote(id).await?),
        }
    }
}
