//! Client SDK for the Mangopay payments REST API.
//!
//! Build a [`MangoPayApi`] from a [`ClientConfig`] and use its resource
//! clients:
//!
//! ```no_run
//! use mangopay::{ClientConfig, MangoPayApi};
//! use mangopay::models::CurrencyIso;
//!
//! # async fn run() -> mangopay::SdkResult<()> {
//! let api = MangoPayApi::new(ClientConfig::new("my-client-id", "my-api-key"))?;
//! let rate = api
//!     .conversions()
//!     .get_conversion_rate(CurrencyIso::Eur, CurrencyIso::Gbp)
//!     .await?;
//! println!("{:?}", rate.client_rate);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod rest;

#[cfg(test)]
mod testing;

pub use api::MangoPayApi;
pub use config::{ApiEnvironment, ClientConfig};
pub use error::{ErrorDetails, SdkError, SdkResult};
pub use rest::{IdempotencyKey, Page, Pagination, PaginationMeta, Sorting};
