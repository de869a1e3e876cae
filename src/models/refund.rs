use serde::{Deserialize, Serialize};

use super::common::{Money, TransactionNature, TransactionStatus, TransactionType, impl_entity};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefundReason {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_reason_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_reason_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Refund {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_wallet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_wallet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<i64>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<TransactionNature>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_transaction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_transaction_type: Option<TransactionType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<RefundReason>,
}

impl_entity!(Refund);

/// Body of a pay-in refund; omitting the funds refunds the full amount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRefund {
    pub author_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Query filter for refund lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterRefunds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,
}
