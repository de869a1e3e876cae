//! Virtual IBANs attached to wallets.

use serde_json::json;

use crate::error::SdkResult;
use crate::models::VirtualAccount;
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey, NoFilter, Page, Pagination, Sorting};

#[derive(Clone)]
pub struct ApiVirtualAccounts {
    executor: ApiExecutor,
}

impl ApiVirtualAccounts {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    pub async fn create(
        &self,
        wallet_id: &str,
        account: &VirtualAccount,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<VirtualAccount> {
        self.executor
            .create(Endpoint::VirtualAccountCreate, &[wallet_id], account, idempotency_key)
            .await
    }

    pub async fn get(&self, wallet_id: &str, account_id: &str) -> SdkResult<VirtualAccount> {
        self.executor
            .get(Endpoint::VirtualAccountGet, &[wallet_id, account_id])
            .await
    }

    pub async fn list(
        &self,
        wallet_id: &str,
        pagination: &Pagination,
        sorting: Option<&Sorting>,
    ) -> SdkResult<Page<VirtualAccount>> {
        self.executor
            .list(Endpoint::VirtualAccountList, &[wallet_id], pagination, sorting, &NoFilter {})
            .await
    }

    /// Irreversible; the account keeps its details but stops receiving funds
    pub async fn deactivate(&self, wallet_id: &str, account_id: &str) -> SdkResult<VirtualAccount> {
        self.executor
            .save(Endpoint::VirtualAccountDeactivate, &[wallet_id, account_id], &json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{VirtualAccountPurpose, VirtualAccountStatus};
    use crate::testing::{MockResponse, MockServer};
    use reqwest::Method;

    fn account_json(status: &str, active: bool) -> serde_json::Value {
        json!({
            "Id": "va_1",
            "WalletId": "w_1",
            "VirtualAccountPurpose": "COLLECTION",
            "Country": "FR",
            "Status": status,
            "Active": active,
            "LocalAccountDetails": {
                "Account": {"IBAN": "FR7630004000031234567890143", "BIC": "BNPAFRPP"},
                "BankName": "BNP"
            },
            "Capabilities": {
                "LocalPayinAvailable": true,
                "InternationalPayinAvailable": false,
                "Currencies": ["EUR"]
            }
        })
    }

    #[tokio::test]
    async fn test_create_then_deactivate() {
        let server = MockServer::start().await;
        server.mock(
            Method::POST,
            "/v2.01/test-client/wallets/w_1/virtual-accounts",
            MockResponse::json(200, account_json("ACTIVE", true)),
        );
        server.mock(
            Method::PUT,
            "/v2.01/test-client/wallets/w_1/virtual-accounts/va_1",
            MockResponse::json(200, account_json("CLOSED", false)),
        );

        let accounts = server.api().virtual_accounts();
        let created = accounts
            .create("w_1", &VirtualAccount::new("FR", VirtualAccountPurpose::Collection), None)
            .await
            .unwrap();
        assert_eq!(created.status, Some(VirtualAccountStatus::Active));
        assert!(created.capabilities.unwrap().local_payin_available);

        let body = server.requests()[0].body_json();
        assert_eq!(body, json!({"Country": "FR", "VirtualAccountPurpose": "COLLECTION"}));

        let closed = accounts.deactivate("w_1", "va_1").await.unwrap();
        assert_eq!(closed.active, Some(false));
        assert_eq!(server.requests()[1].method, Method::PUT);
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let server = MockServer::start().await;
        server.mock(
            Method::GET,
            "/v2.01/test-client/wallets/w_1/virtual-accounts/va_1",
            MockResponse::json(200, account_json("ACTIVE", true)),
        );
        server.mock(
            Method::GET,
            "/v2.01/test-client/wallets/w_1/virtual-accounts",
            MockResponse::json(200, json!([account_json("ACTIVE", true)]))
                .with_header("x-number-of-pages", "1")
                .with_header("x-number-of-items", "1"),
        );

        let accounts = server.api().virtual_accounts();
        let account = accounts.get("w_1", "va_1").await.unwrap();
        assert_eq!(
            account
                .local_account_details
                .and_then(|d| d.account)
                .and_then(|a| a.iban)
                .as_deref(),
            Some("FR7630004000031234567890143")
        );

        let page = accounts.list("w_1", &Pagination::default(), None).await.unwrap();
        assert_eq!(page.len(), 1);
    }
}
