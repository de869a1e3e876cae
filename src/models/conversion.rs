//! Currency conversions between wallets.
//!
//! A conversion is either instant (executed at the current client rate) or
//! quoted (executed at a rate locked by a [`ConversionQuote`] for a limited
//! duration). Both variants exist for user wallets and for the platform's
//! own client wallets.

use serde::{Deserialize, Serialize};

use super::common::{
    ClientWalletType, CustomFees, Money, TransactionNature, TransactionStatus, TransactionType,
    impl_entity,
};

// ============================================================================
// Rates and margins
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConversionRate {
    /// Rate applied to the platform, margins included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginType {
    /// Percentage of the transaction amount
    Percentage,
    /// Expressed in pips
    Pip,
}

/// Margin added on top of the market rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserMargin {
    #[serde(rename = "Type")]
    pub margin_type: MarginType,

    pub value: f64,

    /// Computed by the API in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

impl UserMargin {
    pub fn new(margin_type: MarginType, value: f64) -> Self {
        Self {
            margin_type,
            value,
            amount: None,
        }
    }
}

/// Margins applied to a conversion; `user` is absent when none was requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarginsResponse {
    pub mangopay: UserMargin,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserMargin>,
}

// ============================================================================
// Conversions
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Conversion {
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
    pub credited_wallet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_fees: Option<CustomFees>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<TransactionNature>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate_response: Option<ConversionRate>,

    /// Set when the conversion executed a quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins_response: Option<MarginsResponse>,
}

impl_entity!(Conversion);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionQuoteStatus {
    Active,
    Expired,
    Used,
    #[serde(other)]
    Unknown,
}

/// Rate locked for `duration` seconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConversionQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credited_funds: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<CustomFees>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_fees: Option<CustomFees>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_margin: Option<UserMargin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversionQuoteStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate_response: Option<ConversionRate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins_response: Option<MarginsResponse>,
}

impl_entity!(ConversionQuote);

// ============================================================================
// Create requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstantConversion {
    pub author_id: String,
    pub debited_wallet_id: String,
    pub credited_wallet_id: String,
    pub debited_funds: Money,
    pub credited_funds: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<CustomFees>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_margin: Option<UserMargin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateClientWalletsInstantConversion {
    pub debited_wallet_type: ClientWalletType,
    pub credited_wallet_type: ClientWalletType,
    pub debited_funds: Money,
    pub credited_funds: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQuotedConversion {
    pub quote_id: String,
    pub author_id: String,
    pub debited_wallet_id: String,
    pub credited_wallet_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateClientWalletsQuotedConversion {
    pub quote_id: String,
    pub debited_wallet_type: ClientWalletType,
    pub credited_wallet_type: ClientWalletType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrencyIso;
    use crate::models::common::FeeType;
    use serde_json::json;

    #[test]
    fn test_instant_conversion_response() {
        let conversion: Conversion = serde_json::from_value(json!({
            "Id": "conv_1",
            "CreationDate": 1700000000,
            "AuthorId": "u_1",
            "DebitedWalletId": "w_eur",
            "CreditedWalletId": "w_gbp",
            "DebitedFunds": {"Currency": "EUR", "Amount": 79},
            "CreditedFunds": {"Currency": "GBP", "Amount": 67},
            "Fees": {"Currency": "EUR", "Amount": 9},
            "RequestedFees": {"Currency": "EUR", "Amount": 9, "Type": "FIXED"},
            "Status": "SUCCEEDED",
            "Type": "CONVERSION",
            "Nature": "REGULAR",
            "ResultCode": "000000",
            "ConversionRateResponse": {"ClientRate": 0.85, "MarketRate": 0.86},
            "MarginsResponse": {"Mangopay": {"Type": "PERCENTAGE", "Value": 0.5, "Amount": 1}}
        }))
        .unwrap();

        assert_eq!(conversion.status, Some(TransactionStatus::Succeeded));
        assert_eq!(conversion.transaction_type, Some(TransactionType::Conversion));
        assert_eq!(
            conversion.requested_fees.and_then(|f| f.fee_type),
            Some(FeeType::Fixed)
        );
        let margins = conversion.margins_response.unwrap();
        assert_eq!(margins.mangopay.margin_type, MarginType::Percentage);
        assert!(margins.user.is_none());
        assert_eq!(
            conversion.conversion_rate_response.and_then(|r| r.client_rate),
            Some(0.85)
        );
    }

    #[test]
    fn test_quote_request_body() {
        let quote = ConversionQuote {
            debited_funds: Some(Money::new(CurrencyIso::Eur, 50)),
            credited_funds: Some(Money::currency(CurrencyIso::Gbp)),
            duration: Some(300),
            user_margin: Some(UserMargin::new(MarginType::Percentage, 0.1)),
            tag: Some("quote".into()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&quote).unwrap(),
            json!({
                "Tag": "quote",
                "DebitedFunds": {"Currency": "EUR", "Amount": 50},
                "CreditedFunds": {"Currency": "GBP"},
                "UserMargin": {"Type": "PERCENTAGE", "Value": 0.1},
                "Duration": 300
            })
        );
    }

    #[test]
    fn test_quote_status() {
        let quote: ConversionQuote =
            serde_json::from_value(json!({"Id": "q_1", "Status": "ACTIVE"})).unwrap();
        assert_eq!(quote.status, Some(ConversionQuoteStatus::Active));
    }

    #[test]
    fn test_client_wallets_quoted_body() {
        let body = CreateClientWalletsQuotedConversion {
            quote_id: "q_1".into(),
            debited_wallet_type: ClientWalletType::Fees,
            credited_wallet_type: ClientWalletType::Credit,
            tag: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"QuoteId": "q_1", "DebitedWalletType": "FEES", "CreditedWalletType": "CREDIT"})
        );
    }
}
