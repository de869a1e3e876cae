//! Read-only lookups: users, pay-ins, pay-outs and idempotency responses

use serde_json::Value;

use super::to_json;
use crate::api::MangoPayApi;
use crate::cli::parser::{GetCommand, ResponseCommands, UserCommands};

pub struct ResourceCommandHandler {
    api: MangoPayApi,
}

impl ResourceCommandHandler {
    pub fn new(api: MangoPayApi) -> Self {
        Self { api }
    }

    pub async fn users(&self, command: &UserCommands) -> anyhow::Result<Value> {
        let users = self.api.users();
        match command {
            UserCommands::Get { id } => to_json(&users.get(id).await?),
            UserCommands::ScaStatus { id } => to_json(&users.get_sca_status(id).await?),
        }
    }

    pub async fn pay_ins(&self, command: &GetCommand) -> anyhow::Result<Value> {
        let GetCommand::Get { id } = command;
        to_json(&self.api.pay_ins().get(id).await?)
    }

    pub async fn pay_outs(&self, command: &GetCommand) -> anyhow::Result<Value> {
        let GetCommand::Get { id } = command;
        to_json(&self.api.pay_outs().get(id).await?)
    }

    pub async fn responses(&self, command: &ResponseCommands) -> anyhow::Result<Value> {
        let ResponseCommands::Get { key } = command;
        to_json(&self.api.responses().get(key).await?)
    }
}
