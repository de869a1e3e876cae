//! HTTP plumbing shared by all resource clients

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod executor;
pub mod idempotency;
pub mod pagination;

pub use auth::{Authenticator, OAuthAuthenticator, StaticTokenAuthenticator};
pub use endpoint::{ApiVersion, Endpoint};
pub use executor::{ApiExecutor, NoFilter};
pub use idempotency::IdempotencyKey;
pub use pagination::{MAX_PER_PAGE, Page, Pagination, PaginationMeta, SortDirection, Sorting};
