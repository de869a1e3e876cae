//! Types shared across resource families.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Entity
// ============================================================================

/// A resource carrying a server-assigned identifier.
///
/// Values are never updated in place; every remote call returns a new one.
pub trait Entity {
    fn id(&self) -> Option<&str>;

    fn tag(&self) -> Option<&str>;

    /// Unix timestamp (seconds) set by the API on creation
    fn creation_date(&self) -> Option<i64>;

    fn created_at(&self) -> Option<jiff::Timestamp> {
        self.creation_date()
            .and_then(|secs| jiff::Timestamp::from_second(secs).ok())
    }

    /// True once the API has assigned an id
    fn is_persisted(&self) -> bool {
        self.id().is_some_and(|id| !id.is_empty())
    }
}

/// Implements [`Entity`] for structs with `id`, `tag` and `creation_date` fields
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::Entity for $ty {
                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn tag(&self) -> Option<&str> {
                    self.tag.as_deref()
                }

                fn creation_date(&self) -> Option<i64> {
                    self.creation_date
                }
            }
        )+
    };
}

pub(crate) use impl_entity;

/// Decodes an explicit `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Money
// ============================================================================

/// ISO 4217 currencies accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyIso {
    Aed,
    Aud,
    Bgn,
    Cad,
    Chf,
    Cny,
    Czk,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Ils,
    Isk,
    Jpy,
    Mxn,
    Nok,
    Nzd,
    Pln,
    Ron,
    Sek,
    Sgd,
    Try,
    Usd,
    Zar,
}

impl fmt::Display for CurrencyIso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // variant names are the ISO codes in title case
        f.write_str(&format!("{:?}", self).to_uppercase())
    }
}

/// Amount in minor units of the currency (cents for EUR)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Money {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyIso>,

    /// Left unset on the credited side of a conversion; the API computes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

impl Money {
    pub fn new(currency: CurrencyIso, amount: i64) -> Self {
        Self {
            currency: Some(currency),
            amount: Some(amount),
        }
    }

    /// Currency only, amount to be computed by the API
    pub fn currency(currency: CurrencyIso) -> Self {
        Self {
            currency: Some(currency),
            amount: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    Percentage,
    Fixed,
}

/// Fees with an explicit calculation mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomFees {
    #[serde(flatten)]
    pub money: Money,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<FeeType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl CustomFees {
    pub fn fixed(currency: CurrencyIso, amount: i64) -> Self {
        Self {
            money: Money::new(currency, amount),
            fee_type: Some(FeeType::Fixed),
            value: None,
        }
    }

    pub fn percentage(currency: CurrencyIso, value: i64) -> Self {
        Self {
            money: Money::currency(currency),
            fee_type: Some(FeeType::Percentage),
            value: Some(value),
        }
    }
}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Created,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "PAYIN")]
    PayIn,
    #[serde(rename = "PAYOUT")]
    PayOut,
    #[serde(rename = "TRANSFER")]
    Transfer,
    #[serde(rename = "CONVERSION")]
    Conversion,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionNature {
    Regular,
    Refund,
    Repudiation,
    Settlement,
    #[serde(other)]
    Unknown,
}

/// Client-owned wallet used by platform-level conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientWalletType {
    Fees,
    Credit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecureMode {
    Default,
    Force,
    NoChoice,
}

// ============================================================================
// Postal address
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// ISO 3166-1 alpha-2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
