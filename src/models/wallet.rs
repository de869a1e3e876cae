use serde::{Deserialize, Serialize};

use super::common::{CurrencyIso, Money, impl_entity};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wallet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyIso>,

    /// Read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funds_type: Option<String>,
}

impl Wallet {
    pub fn new(owner_id: impl Into<String>, currency: CurrencyIso, description: impl Into<String>) -> Self {
        Self {
            owners: vec![owner_id.into()],
            currency: Some(currency),
            description: Some(description.into()),
            ..Default::default()
        }
    }
}

impl_entity!(Wallet);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wallet_create_body() {
        let wallet = Wallet::new("u_1", CurrencyIso::Gbp, "GBP wallet");
        assert_eq!(
            serde_json::to_value(&wallet).unwrap(),
            json!({"Owners": ["u_1"], "Description": "GBP wallet", "Currency": "GBP"})
        );
    }

    #[test]
    fn test_wallet_balance_decoding() {
        let wallet: Wallet = serde_json::from_value(json!({
            "Id": "w_1",
            "Owners": ["u_1"],
            "Currency": "EUR",
            "Balance": {"Currency": "EUR", "Amount": 1000},
            "FundsType": "DEFAULT"
        }))
        .unwrap();
        assert_eq!(wallet.balance, Some(Money::new(CurrencyIso::Eur, 1000)));
    }
}
