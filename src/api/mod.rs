//! Resource clients for the Mangopay REST API.
//!
//! [`MangoPayApi`] is the entry point: build it once from a
//! [`ClientConfig`](crate::config::ClientConfig) and obtain per-resource
//! clients from it. All clients share one HTTP connection pool and one
//! token cache, so they are cheap to create and clone.

mod conversions;
mod pay_ins;
mod pay_outs;
mod responses;
mod settlements;
mod users;
mod virtual_accounts;
mod wallets;

pub use conversions::ApiConversions;
pub use pay_ins::ApiPayIns;
pub use pay_outs::ApiPayOuts;
pub use responses::ApiResponses;
pub use settlements::{ApiSettlements, SETTLEMENT_CONTENT_TYPE};
pub use users::ApiUsers;
pub use virtual_accounts::ApiVirtualAccounts;
pub use wallets::ApiWallets;

use crate::config::ClientConfig;
use crate::error::SdkResult;
use crate::rest::ApiExecutor;

#[derive(Clone)]
pub struct MangoPayApi {
    executor: ApiExecutor,
}

impl MangoPayApi {
    /// Validates the configuration and builds the shared HTTP client.
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        config.validate()?;

        Ok(Self {
            executor: ApiExecutor::new(config)?,
        })
    }

    pub fn from_executor(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &ApiExecutor {
        &self.executor
    }

    pub fn settlements(&self) -> ApiSettlements {
        ApiSettlements::new(self.executor.clone())
    }

    pub fn conversions(&self) -> ApiConversions {
        ApiConversions::new(self.executor.clone())
    }

    pub fn users(&self) -> ApiUsers {
        ApiUsers::new(self.executor.clone())
    }

    pub fn wallets(&self) -> ApiWallets {
        ApiWallets::new(self.executor.clone())
    }

    pub fn pay_ins(&self) -> ApiPayIns {
        ApiPayIns::new(self.executor.clone())
    }

    pub fn pay_outs(&self) -> ApiPayOuts {
        ApiPayOuts::new(self.executor.clone())
    }

    pub fn responses(&self) -> ApiResponses {
        ApiResponses::new(self.executor.clone())
    }

    pub fn virtual_accounts(&self) -> ApiVirtualAccounts {
        ApiVirtualAccounts::new(self.executor.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;

    #[test]
    fn test_new_rejects_missing_credentials() {
        let err = MangoPayApi::new(ClientConfig::new("client", "")).err().unwrap();
        match err {
            SdkError::Configuration { key, .. } => assert_eq!(key, "client.api_key"),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_static_token_replaces_api_key() {
        let config = ClientConfig::new("client", "").with_access_token("token");
        assert!(MangoPayApi::new(config).is_ok());
    }

    #[tokio::test]
    async fn test_clients_share_one_executor() {
        let server = crate::testing::MockServer::start().await;
        let api = server.api();
        assert_eq!(api.executor().config().client_id, crate::testing::TEST_CLIENT_ID);
        assert_eq!(api.executor().config().base_url(), server.url().trim_end_matches('/'));
    }
}
