//! Pay-ins: funds entering a wallet.
//!
//! The payment method and the execution flow are independent tagged unions
//! flattened into [`PayIn`], keyed by the `PaymentType` and `ExecutionType`
//! fields the API sends.

use serde::{Deserialize, Serialize};

use super::common::{
    Money, SecureMode, TransactionNature, TransactionStatus, TransactionType, impl_entity,
};

// ============================================================================
// Payment details
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInPaymentDetailsCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    /// Registered card, required for direct execution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

/// Bank account the payer must wire to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInBankAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,

    #[serde(rename = "IBAN", default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,

    #[serde(rename = "BIC", default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInPaymentDetailsBankWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_debited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_fees: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<PayInBankAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInPaymentDetailsDirectDebit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_debit_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInPaymentDetailsPreAuthorized {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_authorization_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "PaymentType")]
pub enum PayInPaymentDetails {
    #[serde(rename = "CARD")]
    Card(PayInPaymentDetailsCard),
    #[serde(rename = "BANK_WIRE")]
    BankWire(PayInPaymentDetailsBankWire),
    #[serde(rename = "DIRECT_DEBIT")]
    DirectDebit(PayInPaymentDetailsDirectDebit),
    #[serde(rename = "PREAUTHORIZED")]
    PreAuthorized(PayInPaymentDetailsPreAuthorized),
    /// Payment methods this crate does not model
    #[serde(other)]
    Unknown,
}

// ============================================================================
// Execution details
// ============================================================================

/// Hosted payment page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInExecutionDetailsWeb {
    #[serde(rename = "ReturnURL", default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    #[serde(rename = "TemplateURL", default, skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_mode: Option<SecureMode>,

    /// Set by the API: where to send the payer
    #[serde(rename = "RedirectURL", default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInExecutionDetailsDirect {
    #[serde(rename = "SecureModeReturnURL", default, skip_serializing_if = "Option::is_none")]
    pub secure_mode_return_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_mode: Option<SecureMode>,

    #[serde(rename = "SecureModeRedirectURL", default, skip_serializing_if = "Option::is_none")]
    pub secure_mode_redirect_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_mode_needed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ExecutionType")]
pub enum PayInExecutionDetails {
    #[serde(rename = "WEB")]
    Web(PayInExecutionDetailsWeb),
    #[serde(rename = "DIRECT")]
    Direct(PayInExecutionDetailsDirect),
    #[serde(other)]
    Unknown,
}

// ============================================================================
// Pay-in
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayIn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_wallet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,

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

    #[serde(flatten)]
    pub payment_details: PayInPaymentDetails,

    #[serde(flatten)]
    pub execution_details: PayInExecutionDetails,
}

impl PayIn {
    pub fn new(
        author_id: impl Into<String>,
        credited_wallet_id: impl Into<String>,
        debited_funds: Money,
        fees: Money,
        payment_details: PayInPaymentDetails,
        execution_details: PayInExecutionDetails,
    ) -> Self {
        Self {
            id: None,
            tag: None,
            creation_date: None,
            author_id: Some(author_id.into()),
            credited_user_id: None,
            credited_wallet_id: Some(credited_wallet_id.into()),
            debited_funds: Some(debited_funds),
            credited_funds: None,
            fees: Some(fees),
            status: None,
            result_code: None,
            result_message: None,
            execution_date: None,
            transaction_type: None,
            nature: None,
            payment_details,
            execution_details,
        }
    }
}

impl_entity!(PayIn);
