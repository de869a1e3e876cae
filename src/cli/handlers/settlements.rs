//! settlements command handler

use anyhow::Context;
use serde_json::{Value, json};
use tracing::info;

use super::to_json;
use crate::api::MangoPayApi;
use crate::cli::parser::SettlementCommands;
use crate::models::Settlement;
use crate::rest::Pagination;

pub struct SettlementCommandHandler {
    api: MangoPayApi,
}

impl SettlementCommandHandler {
    pub fn new(api: MangoPayApi) -> Self {
        Self { api }
    }

    pub async fn execute(&self, command: &SettlementCommands) -> anyhow::Result<Value> {
        let settlements = self.api.settlements();

        match command {
            SettlementCommands::UploadUrl { file_name, idempotency } => {
                let settlement = settlements
                    .generate_upload_url(
                        &Settlement::with_file_name(file_name.as_str()),
                        idempotency.idempotency_key.as_ref(),
                    )
                    .await?;
                to_json(&settlement)
            }
            SettlementCommands::Get { id } => to_json(&settlements.get(id).await?),
            SettlementCommands::NewUploadUrl { id, file_name } => {
                let settlement = Settlement {
                    id: Some(id.clone()),
                    file_name: Some(file_name.clone()),
                    ..Default::default()
                };
                to_json(&settlements.generate_new_upload_url(&settlement).await?)
            }
            SettlementCommands::Upload {
                file,
                file_name,
                idempotency,
            } => {
                let file_name = match file_name {
                    Some(name) => name.clone(),
                    None => file
                        .file_name()
                        .and_then(|name| name.to_str())
                        .map(str::to_string)
                        .context("Cannot derive a file name from --file; pass --file-name")?,
                };
                let csv = tokio::fs::read(file)
                    .await
                    .with_context(|| format!("Failed to read {}", file.display()))?;

                info!(file_name = %file_name, bytes = csv.len(), "Uploading settlement file");
                let settlement = settlements
                    .create_and_upload(&file_name, csv, idempotency.idempotency_key.as_ref())
                    .await?;
                to_json(&settlement)
            }
            SettlementCommands::Validations { id, page } => {
                let pagination = Pagination::new(page.page, page.per_page);
                let (validation, meta) = settlements.get_validations(id, &pagination).await?;
                Ok(json!({
                    "validation": to_json(&validation)?,
                    "clean": validation.is_clean(),
                    "pagination": {
                        "page": meta.page,
                        "per_page": meta.per_page,
                        "total_pages": meta.total_pages,
                        "total_items": meta.total_items,
                    }
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::{IdempotencyArgs, PageArgs};
    use crate::testing::{MockResponse, MockServer};
    use reqwest::Method;
    use std::io::Write;

    #[tokio::test]
    async fn test_upload_derives_file_name() {
        let server = MockServer::start().await;
        let upload_url = format!("{}/upload/stl_1", server.url());
        server.mock(
            Method::POST,
            "/V3.0/test-client/payins/intents/settlements/upload-url",
            MockResponse::json(
                200,
                json!({"SettlementId": "stl_1", "Status": "PENDING_UPLOAD", "UploadUrl": upload_url}),
            ),
        );
        server.mock(Method::PUT, "/upload/stl_1", MockResponse::text(200, ""));

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "IntentId,Amount").unwrap();
        let expected_name = file.path().file_name().unwrap().to_str().unwrap().to_string();

        let handler = SettlementCommandHandler::new(server.api());
        let output = handler
            .execute(&SettlementCommands::Upload {
                file: file.path().to_path_buf(),
                file_name: None,
                idempotency: IdempotencyArgs::default(),
            })
            .await
            .unwrap();

        assert_eq!(output["SettlementId"], "stl_1");
        let requests = server.requests();
        assert_eq!(requests[0].body_json()["FileName"], expected_name);
        assert_eq!(requests[1].body_text(), "IntentId,Amount\n");
    }

    #[tokio::test]
    async fn test_validations_report_pagination() {
        let server = MockServer::start().await;
        server.mock(
            Method::GET,
            "/V3.0/test-client/payins/intents/settlements/stl_1/validations",
            MockResponse::json(200, json!({"FooterErrors": [], "LinesErrors": []}))
                .with_header("x-number-of-pages", "2")
                .with_header("x-number-of-items", "30"),
        );

        let handler = SettlementCommandHandler::new(server.api());
        let output = handler
            .execute(&SettlementCommands::Validations {
                id: "stl_1".into(),
                page: PageArgs { page: 1, per_page: 20 },
            })
            .await
            .unwrap();

        assert_eq!(output["clean"], true);
        assert_eq!(output["pagination"]["total_pages"], 2);
        assert_eq!(server.requests()[0].query_param("per_page").as_deref(), Some("20"));
    }
}
