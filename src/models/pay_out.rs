use serde::{Deserialize, Serialize};

use super::common::{
    Money, TransactionNature, TransactionStatus, TransactionType, impl_entity, null_as_default,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutMode {
    Standard,
    InstantPayment,
    InstantPaymentOnly,
}

/// Payout mode as reported back by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutModeApplied {
    Standard,
    InstantPayment,
    InstantPaymentOnly,
    #[serde(other)]
    Unknown,
}

/// Outcome of the recipient name check run on bank-wire pay-outs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientVerificationOfPayee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_verification_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_verification_check: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_verification_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayOutPaymentDetailsBankWire {
    /// Either this or `recipient_id` identifies the destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,

    /// Reference shown on the beneficiary's statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_wire_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_mode_requested: Option<PayoutMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_requested: Option<PayoutModeApplied>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_applied: Option<PayoutModeApplied>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_verification_of_payee: Option<RecipientVerificationOfPayee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "PaymentType")]
pub enum PayOutPaymentDetails {
    #[serde(rename = "BANK_WIRE")]
    BankWire(PayOutPaymentDetailsBankWire),
    #[serde(other)]
    Unknown,
}

impl PayOutPaymentDetails {
    pub fn as_bank_wire(&self) -> Option<&PayOutPaymentDetailsBankWire> {
        match self {
            PayOutPaymentDetails::BankWire(details) => Some(details),
            PayOutPaymentDetails::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayOut {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_wallet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    /// Unset until the funds leave the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<i64>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<TransactionNature>,

    #[serde(flatten)]
    pub payment_details: PayOutPaymentDetails,
}

impl PayOut {
    pub fn bank_wire(
        author_id: impl Into<String>,
        debited_wallet_id: impl Into<String>,
        debited_funds: Money,
        fees: Money,
        details: PayOutPaymentDetailsBankWire,
    ) -> Self {
        Self {
            id: None,
            tag: None,
            creation_date: None,
            author_id: Some(author_id.into()),
            debited_wallet_id: Some(debited_wallet_id.into()),
            debited_funds: Some(debited_funds),
            credited_funds: None,
            fees: Some(fees),
            credited_user_id: None,
            status: None,
            result_code: None,
            result_message: None,
            execution_date: None,
            transaction_type: None,
            nature: None,
            payment_details: PayOutPaymentDetails::BankWire(details),
        }
    }
}

impl_entity!(PayOut);

/// Instant pay-out reachability check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayOutEligibilityRequest {
    pub author_id: String,
    pub debited_funds: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,

    pub bank_account_id: String,
    pub debited_wallet_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_mode_requested: Option<PayoutMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_wire_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstantPayout {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_reachable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unreachable_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayOutEligibilityResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_payout: Option<InstantPayout>,
}
