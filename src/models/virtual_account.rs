use serde::{Deserialize, Serialize};

use super::common::{CurrencyIso, impl_entity, null_as_default};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VirtualAccountPurpose {
    Collection,
    UserOwned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VirtualAccountStatus {
    Collection,
    Pending,
    Active,
    Failed,
    Blocked,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualAccountCapabilities {
    /// Local bank wires can be received
    #[serde(default, deserialize_with = "null_as_default")]
    pub local_payin_available: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub international_payin_available: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: Vec<CurrencyIso>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualAccountNumber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,

    #[serde(rename = "IBAN", default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,

    #[serde(rename = "BIC", default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualAccountDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<VirtualAccountNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_account_purpose: Option<VirtualAccountPurpose>,

    /// ISO 3166-1 alpha-2 country of the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VirtualAccountStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_account_details: Option<VirtualAccountDetails>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub international_account_details: Vec<VirtualAccountDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<VirtualAccountCapabilities>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,
}

impl VirtualAccount {
    pub fn new(country: impl Into<String>, purpose: VirtualAccountPurpose) -> Self {
        Self {
            country: Some(country.into()),
            virtual_account_purpose: Some(purpose),
            ..Default::default()
        }
    }
}

impl_entity!(VirtualAccount);
