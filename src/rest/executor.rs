//! Generic request executor.
//!
//! Turns (endpoint, identifiers, body, pagination, filter, idempotency key)
//! into one HTTP call and decodes the answer. Resource clients never touch
//! `reqwest` directly.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::error::{ErrorDetails, SdkError, SdkResult};
use crate::rest::auth::{Authenticator, OAuthAuthenticator, StaticTokenAuthenticator};
use crate::rest::client::build_http_client;
use crate::rest::endpoint::Endpoint;
use crate::rest::idempotency::{IDEMPOTENCY_HEADER, IdempotencyKey};
use crate::rest::pagination::{Page, Pagination, PaginationMeta, Sorting};

/// Query filter for list calls that take none
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoFilter {}

/// Shared by every resource client created from one configuration.
///
/// Cloning is cheap; clones share the connection pool and token cache.
#[derive(Clone)]
pub struct ApiExecutor {
    inner: Arc<ExecutorInner>,
}

struct ExecutorInner {
    http: reqwest::Client,
    config: ClientConfig,
    auth: Arc<dyn Authenticator>,
}

impl ApiExecutor {
    /// Uses a static token when `access_token` is configured, OAuth otherwise
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        let http = build_http_client(&config)?;

        let auth: Arc<dyn Authenticator> = match config.access_token.as_deref() {
            Some(token) => Arc::new(StaticTokenAuthenticator::new(token)),
            None => Arc::new(OAuthAuthenticator::new(
                http.clone(),
                config.base_url(),
                config.client_id.clone(),
                config.api_key.clone(),
            )?),
        };

        Ok(Self::with_authenticator(config, http, auth))
    }

    pub fn with_authenticator(
        config: ClientConfig,
        http: reqwest::Client,
        auth: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            inner: Arc::new(ExecutorInner { http, config, auth }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// POST a body, optionally deduplicated by an idempotency key
    pub async fn create<B, R>(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        body: &B,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let (_, body) = self
            .send(endpoint, ids, idempotency_key, |request| request.json(body))
            .await?;
        decode(endpoint, body)
    }

    /// PUT a body to an existing resource
    pub async fn save<B, R>(&self, endpoint: Endpoint, ids: &[&str], body: &B) -> SdkResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let (_, body) = self
            .send(endpoint, ids, None, |request| request.json(body))
            .await?;
        decode(endpoint, body)
    }

    pub async fn get<R>(&self, endpoint: Endpoint, ids: &[&str]) -> SdkResult<R>
    where
        R: DeserializeOwned,
    {
        let (_, body) = self.send(endpoint, ids, None, |request| request).await?;
        decode(endpoint, body)
    }

    /// Fetches one page of a list endpoint
    pub async fn list<R, F>(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        pagination: &Pagination,
        sorting: Option<&Sorting>,
        filter: &F,
    ) -> SdkResult<Page<R>>
    where
        R: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let (headers, body) = self
            .send(endpoint, ids, None, |request| {
                paginate(request, pagination, sorting).query(filter)
            })
            .await?;

        Ok(Page {
            data: decode(endpoint, body)?,
            pagination: PaginationMeta::from_headers(pagination, &headers),
        })
    }

    /// Single object whose nested collections are paginated server-side
    pub async fn get_paginated<R>(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        pagination: &Pagination,
    ) -> SdkResult<(R, PaginationMeta)>
    where
        R: DeserializeOwned,
    {
        let (headers, body) = self
            .send(endpoint, ids, None, |request| paginate(request, pagination, None))
            .await?;

        Ok((
            decode(endpoint, body)?,
            PaginationMeta::from_headers(pagination, &headers),
        ))
    }

    /// Direct PUT to a pre-signed URL; carries no Authorization header
    pub async fn upload(&self, url: &str, content_type: &str, payload: Vec<u8>) -> SdkResult<StatusCode> {
        let started = Instant::now();
        let size = payload.len();

        let response = self
            .inner
            .http
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Upload to pre-signed URL failed");
                SdkError::transport("upload", e)
            })?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            bytes = size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Upload completed"
        );

        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                error!(status = status.as_u16(), error = %e, "Could not read upload rejection body");
                SdkError::transport("upload", e)
            })?;
            warn!(status = status.as_u16(), "Upload rejected");
            return Err(SdkError::Api {
                status,
                details: ErrorDetails::from_raw_body(&body),
            });
        }

        Ok(status)
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        idempotency_key: Option<&IdempotencyKey>,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> SdkResult<(HeaderMap, String)> {
        let inner = &self.inner;
        let url = endpoint.url(inner.config.base_url(), &inner.config.client_id, ids)?;
        let method = endpoint.method();
        let operation = format!("{:?}", endpoint);

        let authorization = inner.auth.authorization().await?;

        let mut request = inner
            .http
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json");
        if let Some(key) = idempotency_key {
            request = request.header(IDEMPOTENCY_HEADER, key.as_str());
        }
        let request = build(request);

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            error!(%method, path = url.path(), error = %e, "Request failed before a response");
            SdkError::transport(operation.clone(), e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| SdkError::transport(operation.clone(), e))?;

        debug!(
            %method,
            path = url.path(),
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            idempotency_key = idempotency_key.map(|k| k.masked()).as_deref(),
            "API request completed"
        );

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                inner.auth.invalidate().await;
            }
            let details = ErrorDetails::from_raw_body(&body);
            warn!(
                %operation,
                status = status.as_u16(),
                error_type = details.error_type.as_deref(),
                message = details.message.as_deref(),
                "API returned an error"
            );
            return Err(SdkError::Api { status, details });
        }

        Ok((headers, body))
    }
}

impl std::fmt::Debug for ApiExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiExecutor")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

fn paginate(request: RequestBuilder, pagination: &Pagination, sorting: Option<&Sorting>) -> RequestBuilder {
    let request = request.query(&pagination.query());
    match sorting {
        Some(sorting) => request.query(&sorting.query()),
        None => request,
    }
}

fn decode<R: DeserializeOwned>(endpoint: Endpoint, body: String) -> SdkResult<R> {
    // Empty 2xx bodies decode as JSON null
    let text = if body.trim().is_empty() { "null" } else { body.as_str() };

    serde_json::from_str(text).map_err(|e| {
        error!(endpoint = ?endpoint, error = %e, "Response body did not match the expected type");
        SdkError::Decode {
            operation: format!("{:?}", endpoint),
            body,
            source: e,
        }
    })
}
