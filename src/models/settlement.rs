use serde::{Deserialize, Serialize};

use super::common::{impl_entity, null_as_default};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementStatus {
    PendingUpload,
    Uploaded,
    PartiallySettled,
    FullySettled,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Settlement file reconciling intents declared through the API with the
/// funds actually received from an external provider.
///
/// Created by submitting a `file_name`; the response carries a pre-signed
/// `upload_url` for the CSV and the settlement id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settlement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SettlementStatus>,

    /// Creation date at the external provider (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_provider_name: Option<String>,

    /// Captured intents minus refunds and disputes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_intent_amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_processor_fees_amount: Option<i64>,

    /// Amount due to the platform; zero when the file total is negative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_settlement_amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funds_missing_amount: Option<i64>,

    /// The API appends a creation timestamp to the submitted name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
}

impl Settlement {
    /// Request body for a new upload URL
    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Default::default()
        }
    }

    /// Identifier used in settlement paths: `Id`, else `SettlementId`
    pub fn resource_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.settlement_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

impl_entity!(Settlement);

/// Problems found in an uploaded settlement file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettlementValidation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub footer_errors: Vec<SettlementValidationFooter>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lines_errors: Vec<SettlementValidationLine>,
}

impl SettlementValidation {
    pub fn is_clean(&self) -> bool {
        self.footer_errors.is_empty() && self.lines_errors.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettlementValidationFooter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettlementValidationLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_provider_reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_transaction_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;
    use serde_json::json;

    #[test]
    fn test_settlement_decodes_every_field() {
        let settlement: Settlement = serde_json::from_value(json!({
            "Id": "stl_1",
            "Tag": "june",
            "CreationDate": 1717200000,
            "SettlementId": "stl_1",
            "Status": "PENDING_UPLOAD",
            "SettlementDate": 1717100000,
            "ExternalProviderName": "PAYPAL",
            "DeclaredIntentAmount": 10000,
            "ExternalProcessorFeesAmount": 150,
            "ActualSettlementAmount": 9850,
            "FundsMissingAmount": 0,
            "FileName": "a_1717200000.csv",
            "UploadUrl": "https://upload.example.com/a.csv?sig=1"
        }))
        .unwrap();

        assert_eq!(settlement.status, Some(SettlementStatus::PendingUpload));
        assert_eq!(settlement.external_provider_name.as_deref(), Some("PAYPAL"));
        assert_eq!(settlement.declared_intent_amount, Some(10000));
        assert_eq!(settlement.external_processor_fees_amount, Some(150));
        assert_eq!(settlement.actual_settlement_amount, Some(9850));
        assert_eq!(settlement.funds_missing_amount, Some(0));
        assert_eq!(settlement.settlement_date, Some(1717100000));
        assert!(settlement.upload_url.is_some());
        assert_eq!(settlement.tag(), Some("june"));
        assert!(settlement.is_persisted());
        assert_eq!(
            settlement.created_at().map(|t| t.as_second()),
            Some(1717200000)
        );
    }

    #[test]
    fn test_create_body_only_carries_file_name() {
        let body = serde_json::to_value(Settlement::with_file_name("a.csv")).unwrap();
        assert_eq!(body, json!({"FileName": "a.csv"}));
    }

    #[test]
    fn test_resource_id_falls_back_to_settlement_id() {
        let settlement = Settlement {
            settlement_id: Some("stl_2".into()),
            ..Default::default()
        };
        assert_eq!(settlement.resource_id(), Some("stl_2"));
        assert!(Settlement::default().resource_id().is_none());
    }

    #[test]
    fn test_validation_decoding() {
        let validation: SettlementValidation = serde_json::from_value(json!({
            "FooterErrors": [{"FooterName": "TotalSettlementAmount", "Code": "F01", "Description": "Mismatch"}],
            "LinesErrors": [{
                "ExternalProviderReference": "ref-1",
                "ExternalTransactionType": "PAYMENT",
                "Code": "L02",
                "Description": "Unknown intent"
            }]
        }))
        .unwrap();

        assert!(!validation.is_clean());
        assert_eq!(validation.footer_errors[0].code.as_deref(), Some("F01"));
        assert_eq!(
            validation.lines_errors[0].external_transaction_type.as_deref(),
            Some("PAYMENT")
        );
        assert!(SettlementValidation::default().is_clean());
    }

    #[test]
    fn test_validation_accepts_null_error_lists() {
        let validation: SettlementValidation = serde_json::from_str(
            r#"{"FooterErrors": null, "LinesErrors": [{"Code": "L01"}]}"#,
        )
        .unwrap();
        assert!(validation.footer_errors.is_empty());
        assert_eq!(validation.lines_errors[0].code.as_deref(), Some("L01"));

        let clean: SettlementValidation =
            serde_json::from_str(r#"{"FooterErrors": null, "LinesErrors": null}"#).unwrap();
        assert!(clean.is_clean());
    }
}
