use crate::error::SdkResult;
use crate::models::IdempotencyResponse;
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey};

/// Lookup of stored outcomes for idempotent requests
#[derive(Clone)]
pub struct ApiResponses {
    executor: ApiExecutor,
}

impl ApiResponses {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    /// Returns what the API answered the first time `key` was used
    pub async fn get(&self, key: &IdempotencyKey) -> SdkResult<IdempotencyResponse> {
        self.executor
            .get(Endpoint::ResponseGet, &[key.as_str()])
            .await
    }
}
