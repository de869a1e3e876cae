//! Settlement files for intents paid through external providers.
//!
//! Flow: create a settlement to obtain a pre-signed upload URL, PUT the CSV
//! to it, then poll the settlement and its validation report.

use std::path::Path;

use tracing::info;

use crate::error::{SdkError, SdkResult};
use crate::models::{Settlement, SettlementValidation};
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey, Pagination, PaginationMeta};

pub const SETTLEMENT_CONTENT_TYPE: &str = "text/csv";

#[derive(Clone)]
pub struct ApiSettlements {
    executor: ApiExecutor,
}

impl ApiSettlements {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    /// Creates a settlement and returns it with a pre-signed `upload_url`.
    ///
    /// # Arguments
    /// * `settlement` - Only `file_name` is read by the API
    /// * `idempotency_key` - Optional deduplication key
    pub async fn generate_upload_url(
        &self,
        settlement: &Settlement,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<Settlement> {
        self.executor
            .create(Endpoint::SettlementGenerateUploadUrl, &[], settlement, idempotency_key)
            .await
    }

    pub async fn get(&self, settlement_id: &str) -> SdkResult<Settlement> {
        self.executor
            .get(Endpoint::SettlementGet, &[settlement_id])
            .await
    }

    /// Issues a fresh upload URL for an existing settlement, e.g. after the
    /// previous one expired or the file failed validation.
    ///
    /// The settlement is addressed by `id`, falling back to `settlement_id`.
    pub async fn generate_new_upload_url(&self, settlement: &Settlement) -> SdkResult<Settlement> {
        let id = settlement
            .resource_id()
            .ok_or_else(|| SdkError::invalid_request("Settlement has neither Id nor SettlementId"))?;

        let body = Settlement {
            file_name: settlement.file_name.clone(),
            ..Default::default()
        };

        self.executor
            .save(Endpoint::SettlementGenerateNewUploadUrl, &[id], &body)
            .await
    }

    /// Validation report of the uploaded file; line errors are paginated
    pub async fn get_validations(
        &self,
        settlement_id: &str,
        pagination: &Pagination,
    ) -> SdkResult<(SettlementValidation, PaginationMeta)> {
        self.executor
            .get_paginated(Endpoint::SettlementGetValidations, &[settlement_id], pagination)
            .await
    }

    /// PUTs CSV content to a pre-signed URL returned by the API
    pub async fn upload_file(&self, upload_url: &str, csv: Vec<u8>) -> SdkResult<()> {
        self.executor
            .upload(upload_url, SETTLEMENT_CONTENT_TYPE, csv)
            .await?;
        Ok(())
    }

    /// Reads a CSV from disk and uploads it
    pub async fn upload_path(&self, upload_url: &str, path: &Path) -> SdkResult<()> {
        let csv = tokio::fs::read(path).await.map_err(|e| SdkError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        self.upload_file(upload_url, csv).await
    }

    /// Creates a settlement and uploads its file in one go
    pub async fn create_and_upload(
        &self,
        file_name: &str,
        csv: Vec<u8>,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<Settlement> {
        let settlement = self
            .generate_upload_url(&Settlement::with_file_name(file_name), idempotency_key)
            .await?;

        let upload_url = settlement
            .upload_url
            .as_deref()
            .ok_or_else(|| SdkError::invalid_request("Settlement response carries no UploadUrl"))?;

        self.upload_file(upload_url, csv).await?;
        info!(
            settlement_id = settlement.settlement_id.as_deref(),
            "Settlement file uploaded"
        );

        Ok(settlement)
    }
}
