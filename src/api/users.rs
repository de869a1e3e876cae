//! Natural and legal users.

use crate::error::{SdkError, SdkResult};
use crate::models::{
    ScaStatus, User, UserConsent, UserEnrollmentResult, UserLegal, UserNatural,
};
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey, NoFilter, Page, Pagination, Sorting};

#[derive(Clone)]
pub struct ApiUsers {
    executor: ApiExecutor,
}

impl ApiUsers {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    /// Creates a natural or legal user depending on the variant.
    ///
    /// Required fields are checked by the API, not locally; a missing one
    /// comes back as [`SdkError::Api`] with a field-keyed error map.
    pub async fn create(&self, user: &User, idempotency_key: Option<&IdempotencyKey>) -> SdkResult<User> {
        match user {
            User::Natural(natural) => self
                .executor
                .create::<_, UserNatural>(Endpoint::UserNaturalCreate, &[], natural, idempotency_key)
                .await
                .map(User::Natural),
            User::Legal(legal) => self
                .executor
                .create::<_, UserLegal>(Endpoint::UserLegalCreate, &[], legal, idempotency_key)
                .await
                .map(User::Legal),
        }
    }

    /// Either kind, discriminated by the returned `PersonType`
    pub async fn get(&self, user_id: &str) -> SdkResult<User> {
        self.executor.get(Endpoint::UserGet, &[user_id]).await
    }

    pub async fn get_natural(&self, user_id: &str) -> SdkResult<UserNatural> {
        self.executor.get(Endpoint::UserNaturalGet, &[user_id]).await
    }

    pub async fn get_legal(&self, user_id: &str) -> SdkResult<UserLegal> {
        self.executor.get(Endpoint::UserLegalGet, &[user_id]).await
    }

    /// Saves changed fields of an existing user; returns the stored user
    pub async fn update(&self, user: &User) -> SdkResult<User> {
        match user {
            User::Natural(natural) => {
                let id = required_id(natural.id.as_deref())?;
                self.executor
                    .save::<_, UserNatural>(Endpoint::UserNaturalSave, &[id], natural)
                    .await
                    .map(User::Natural)
            }
            User::Legal(legal) => {
                let id = required_id(legal.id.as_deref())?;
                self.executor
                    .save::<_, UserLegal>(Endpoint::UserLegalSave, &[id], legal)
                    .await
                    .map(User::Legal)
            }
        }
    }

    pub async fn list(&self, pagination: &Pagination, sorting: Option<&Sorting>) -> SdkResult<Page<User>> {
        self.executor
            .list(Endpoint::UserList, &[], pagination, sorting, &NoFilter {})
            .await
    }

    pub async fn get_sca_status(&self, user_id: &str) -> SdkResult<ScaStatus> {
        self.executor
            .get(Endpoint::UserScaStatusGet, &[user_id])
            .await
    }

    /// Starts SCA enrollment; the user completes it on the returned page
    pub async fn enroll(&self, user_id: &str) -> SdkResult<UserEnrollmentResult> {
        self.executor
            .create(Endpoint::UserScaEnroll, &[user_id], &serde_json::json!({}), None)
            .await
    }

    /// Starts consent collection for the user's SCA scopes
    pub async fn manage_consent(&self, user_id: &str) -> SdkResult<UserConsent> {
        self.executor
            .create(Endpoint::UserScaConsent, &[user_id], &serde_json::json!({}), None)
            .await
    }
}

fn required_id(id: Option<&str>) -> SdkResult<&str> {
    id.filter(|id| !id.is_empty())
        .ok_or_else(|| SdkError::invalid_request("User has no Id; create it first"))
}
