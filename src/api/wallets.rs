use crate::error::SdkResult;
use crate::models::Wallet;
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey, NoFilter, Page, Pagination, Sorting};

#[derive(Clone)]
pub struct ApiWallets {
    executor: ApiExecutor,
}

impl ApiWallets {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    pub async fn create(&self, wallet: &Wallet, idempotency_key: Option<&IdempotencyKey>) -> SdkResult<Wallet> {
        self.executor
            .create(Endpoint::WalletCreate, &[], wallet, idempotency_key)
            .await
    }

    pub async fn get(&self, wallet_id: &str) -> SdkResult<Wallet> {
        self.executor.get(Endpoint::WalletGet, &[wallet_id]).await
    }

    /// Wallets owned by a user
    pub async fn list_for_user(
        &self,
        user_id: &str,
        pagination: &Pagination,
        sorting: Option<&Sorting>,
    ) -> SdkResult<Page<Wallet>> {
        self.executor
            .list(Endpoint::WalletListForUser, &[user_id], pagination, sorting, &NoFilter {})
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrencyIso;
    use crate::testing::{MockResponse, MockServer};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_and_list() {
        let server = MockServer::start().await;
        server.mock(
            Method::POST,
            "/v2.01/test-client/wallets",
            MockResponse::json(200, json!({"Id": "w_1", "Owners": ["u_1"], "Currency": "GBP"})),
        );
        server.mock(
            Method::GET,
            "/v2.01/test-client/users/u_1/wallets",
            MockResponse::json(200, json!([{"Id": "w_1"}]))
                .with_header("x-number-of-pages", "1")
                .with_header("x-number-of-items", "1"),
        );

        let wallets = server.api().wallets();
        let created = wallets
            .create(&Wallet::new("u_1", CurrencyIso::Gbp, "GBP wallet"), None)
            .await
            .unwrap();
        assert_eq!(created.currency, Some(CurrencyIso::Gbp));

        let page = wallets
            .list_for_user("u_1", &Pagination::default(), None)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert!(!page.has_next());
        assert!(server.requests()[1].query_param("Sort").is_none());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let server = MockServer::start().await;
        let err = server.api().wallets().get("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
