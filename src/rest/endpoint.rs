//! Endpoint table of the Mangopay API.
//!
//! Every remote operation is identified by an [`Endpoint`]; the table maps
//! it to an HTTP method, a path template and the API version prefix.
//! Templates use `{}` for positional identifiers.

use reqwest::{Method, Url};

use crate::error::{SdkError, SdkResult};

/// Version prefix inserted between the host and the client id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V2_01,
    V3_0,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V2_01 => "v2.01",
            ApiVersion::V3_0 => "V3.0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // Settlements
    SettlementGenerateUploadUrl,
    SettlementGet,
    SettlementGenerateNewUploadUrl,
    SettlementGetValidations,

    // Conversions
    ConversionRateGet,
    ConversionInstantCreate,
    ConversionClientWalletsInstantCreate,
    ConversionQuoteCreate,
    ConversionQuoteGet,
    ConversionQuotedCreate,
    ConversionClientWalletsQuotedCreate,
    ConversionGet,

    // Users
    UserNaturalCreate,
    UserLegalCreate,
    UserGet,
    UserNaturalGet,
    UserLegalGet,
    UserNaturalSave,
    UserLegalSave,
    UserList,
    UserScaStatusGet,
    UserScaEnroll,
    UserScaConsent,

    // Wallets
    WalletCreate,
    WalletGet,
    WalletListForUser,

    // Pay-ins
    PayInCardWebCreate,
    PayInCardDirectCreate,
    PayInBankWireDirectCreate,
    PayInDirectDebitWebCreate,
    PayInDirectDebitDirectCreate,
    PayInPreAuthorizedDirectCreate,
    PayInGet,
    PayInRefundCreate,
    PayInRefundList,

    // Pay-outs
    PayOutBankWireCreate,
    PayOutGet,
    PayOutBankWireGet,
    PayOutEligibilityCheck,
    PayOutRefundList,

    // Virtual accounts
    VirtualAccountCreate,
    VirtualAccountGet,
    VirtualAccountList,
    VirtualAccountDeactivate,

    // Idempotency
    ResponseGet,
}

impl Endpoint {
    fn route(&self) -> (Method, &'static str, ApiVersion) {
        use ApiVersion::*;
        use Endpoint::*;

        match self {
            SettlementGenerateUploadUrl => (Method::POST, "/payins/intents/settlements/upload-url", V3_0),
            SettlementGet => (Method::GET, "/payins/intents/settlements/{}", V3_0),
            SettlementGenerateNewUploadUrl => (Method::PUT, "/payins/intents/settlements/{}/upload-url", V3_0),
            SettlementGetValidations => (Method::GET, "/payins/intents/settlements/{}/validations", V3_0),

            ConversionRateGet => (Method::GET, "/conversions/rate/{}/{}", V2_01),
            ConversionInstantCreate => (Method::POST, "/conversions/instant-conversion", V2_01),
            ConversionClientWalletsInstantCreate => (Method::POST, "/clients/conversions/instant-conversion", V2_01),
            ConversionQuoteCreate => (Method::POST, "/conversions/quote", V2_01),
            ConversionQuoteGet => (Method::GET, "/conversions/quote/{}", V2_01),
            ConversionQuotedCreate => (Method::POST, "/conversions/quoted-conversion", V2_01),
            ConversionClientWalletsQuotedCreate => (Method::POST, "/clients/conversions/quoted-conversion", V2_01),
            ConversionGet => (Method::GET, "/conversions/{}", V2_01),

            UserNaturalCreate => (Method::POST, "/users/natural", V2_01),
            UserLegalCreate => (Method::POST, "/users/legal", V2_01),
            UserGet => (Method::GET, "/users/{}", V2_01),
            UserNaturalGet => (Method::GET, "/users/natural/{}", V2_01),
            UserLegalGet => (Method::GET, "/users/legal/{}", V2_01),
            UserNaturalSave => (Method::PUT, "/users/natural/{}", V2_01),
            UserLegalSave => (Method::PUT, "/users/legal/{}", V2_01),
            UserList => (Method::GET, "/users", V2_01),
            UserScaStatusGet => (Method::GET, "/users/{}/sca-status", V2_01),
            UserScaEnroll => (Method::POST, "/sca/users/{}/enrollment", V2_01),
            UserScaConsent => (Method::POST, "/sca/users/{}/consent", V2_01),

            WalletCreate => (Method::POST, "/wallets", V2_01),
            WalletGet => (Method::GET, "/wallets/{}", V2_01),
            WalletListForUser => (Method::GET, "/users/{}/wallets", V2_01),

            PayInCardWebCreate => (Method::POST, "/payins/card/web", V2_01),
            PayInCardDirectCreate => (Method::POST, "/payins/card/direct", V2_01),
            PayInBankWireDirectCreate => (Method::POST, "/payins/bankwire/direct", V2_01),
            PayInDirectDebitWebCreate => (Method::POST, "/payins/directdebit/web", V2_01),
            PayInDirectDebitDirectCreate => (Method::POST, "/payins/directdebit/direct", V2_01),
            PayInPreAuthorizedDirectCreate => (Method::POST, "/payins/preauthorized/direct", V2_01),
            PayInGet => (Method::GET, "/payins/{}", V2_01),
            PayInRefundCreate => (Method::POST, "/payins/{}/refunds", V2_01),
            PayInRefundList => (Method::GET, "/payins/{}/refunds", V2_01),

            PayOutBankWireCreate => (Method::POST, "/payouts/bankwire", V2_01),
            PayOutGet => (Method::GET, "/payouts/{}", V2_01),
            PayOutBankWireGet => (Method::GET, "/payouts/bankwire/{}", V2_01),
            PayOutEligibilityCheck => (Method::POST, "/payouts/reachability", V2_01),
            PayOutRefundList => (Method::GET, "/payouts/{}/refunds", V2_01),

            VirtualAccountCreate => (Method::POST, "/wallets/{}/virtual-accounts", V2_01),
            VirtualAccountGet => (Method::GET, "/wallets/{}/virtual-accounts/{}", V2_01),
            VirtualAccountList => (Method::GET, "/wallets/{}/virtual-accounts", V2_01),
            VirtualAccountDeactivate => (Method::PUT, "/wallets/{}/virtual-accounts/{}", V2_01),

            ResponseGet => (Method::GET, "/responses/{}", V2_01),
        }
    }

    pub fn method(&self) -> Method {
        self.route().0
    }

    pub fn path_template(&self) -> &'static str {
        self.route().1
    }

    pub fn version(&self) -> ApiVersion {
        self.route().2
    }

    /// Number of `{}` placeholders in the path template
    pub fn arity(&self) -> usize {
        self.path_template().matches("{}").count()
    }

    /// Builds `{base}/{version}/{client_id}{path}` with identifiers substituted.
    ///
    /// Identifiers are percent-encoded as single path segments, so an id
    /// containing `/` can never address a different resource.
    pub fn url(&self, base_url: &str, client_id: &str, ids: &[&str]) -> SdkResult<Url> {
        if ids.len() != self.arity() {
            return Err(SdkError::invalid_request(format!(
                "{:?} expects {} identifier(s), got {}",
                self,
                self.arity(),
                ids.len()
            )));
        }
        if let Some(position) = ids.iter().position(|id| id.trim().is_empty()) {
            return Err(SdkError::invalid_request(format!(
                "{:?} identifier #{} is empty",
                self,
                position + 1
            )));
        }

        let mut url = parse_base_url(base_url)?;
        let mut ids = ids.iter();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| SdkError::invalid_request(format!("Base URL cannot hold a path: {}", base_url)))?;
            segments.pop_if_empty();
            segments.push(self.version().as_str());
            segments.push(client_id);
            for part in self.path_template().split('/').filter(|p| !p.is_empty()) {
                if part == "{}" {
                    // arity was checked above
                    if let Some(id) = ids.next() {
                        segments.push(id);
                    }
                } else {
                    segments.push(part);
                }
            }
        }
        Ok(url)
    }
}

/// OAuth token endpoint, which sits outside the per-client path layout
pub fn oauth_token_url(base_url: &str) -> SdkResult<Url> {
    let mut url = parse_base_url(base_url)?;
    url.path_segments_mut()
        .map_err(|_| SdkError::invalid_request(format!("Base URL cannot hold a path: {}", base_url)))?
        .pop_if_empty()
        .extend([ApiVersion::V2_01.as_str(), "oauth", "token"]);
    Ok(url)
}

fn parse_base_url(base_url: &str) -> SdkResult<Url> {
    Url::parse(base_url)
        .map_err(|e| SdkError::invalid_request(format!("Invalid base URL '{}': {}", base_url, e)))
}
