use crate::error::SdkResult;
use crate::models::{
    Conversion, ConversionQuote, ConversionRate, CreateClientWalletsInstantConversion,
    CreateClientWalletsQuotedConversion, CreateInstantConversion, CreateQuotedConversion,
    CurrencyIso,
};
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey};

/// Currency conversions between wallets
#[derive(Clone)]
pub struct ApiConversions {
    executor: ApiExecutor,
}

impl ApiConversions {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    /// Current rate between two currencies, margins included
    pub async fn get_conversion_rate(
        &self,
        debited_currency: CurrencyIso,
        credited_currency: CurrencyIso,
    ) -> SdkResult<ConversionRate> {
        let debited = debited_currency.to_string();
        let credited = credited_currency.to_string();

        self.executor
            .get(Endpoint::ConversionRateGet, &[&debited, &credited])
            .await
    }

    pub async fn create_instant_conversion(
        &self,
        conversion: &CreateInstantConversion,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<Conversion> {
        self.executor
            .create(Endpoint::ConversionInstantCreate, &[], conversion, idempotency_key)
            .await
    }

    /// Instant conversion between the platform's own client wallets
    pub async fn create_client_wallets_instant_conversion(
        &self,
        conversion: &CreateClientWalletsInstantConversion,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<Conversion> {
        self.executor
            .create(
                Endpoint::ConversionClientWalletsInstantCreate,
                &[],
                conversion,
                idempotency_key,
            )
            .await
    }

    /// Locks a rate for `quote.duration` seconds
    pub async fn create_conversion_quote(
        &self,
        quote: &ConversionQuote,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<ConversionQuote> {
        self.executor
            .create(Endpoint::ConversionQuoteCreate, &[], quote, idempotency_key)
            .await
    }

    pub async fn get_conversion_quote(&self, quote_id: &str) -> SdkResult<ConversionQuote> {
        self.executor
            .get(Endpoint::ConversionQuoteGet, &[quote_id])
            .await
    }

    /// Executes an active quote
    pub async fn create_quoted_conversion(
        &self,
        conversion: &CreateQuotedConversion,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<Conversion> {
        self.executor
            .create(Endpoint::ConversionQuotedCreate, &[], conversion, idempotency_key)
            .await
    }

    pub async fn create_client_wallets_quoted_conversion(
        &self,
        conversion: &CreateClientWalletsQuotedConversion,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<Conversion> {
        self.executor
            .create(
                Endpoint::ConversionClientWalletsQuotedCreate,
                &[],
                conversion,
                idempotency_key,
            )
            .await
    }

    /// Fetches an instant or quoted conversion
    pub async fn get_conversion(&self, conversion_id: &str) -> SdkResult<Conversion> {
        self.executor
            .get(Endpoint::ConversionGet, &[conversion_id])
            .await
    }
}
