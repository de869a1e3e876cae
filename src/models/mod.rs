//! Data-transfer objects mirroring the API's JSON resources.
//!
//! Field names follow the wire contract (PascalCase); every field the API
//! may omit is an `Option`.

mod common;
mod conversion;
mod pay_in;
mod pay_out;
mod refund;
mod response;
mod settlement;
mod user;
mod virtual_account;
mod wallet;

pub use common::{
    Address, ClientWalletType, CurrencyIso, CustomFees, Entity, FeeType, Money, SecureMode,
    TransactionNature, TransactionStatus, TransactionType,
};
pub use conversion::{
    Conversion, ConversionQuote, ConversionQuoteStatus, ConversionRate,
    CreateClientWalletsInstantConversion, CreateClientWalletsQuotedConversion,
    CreateInstantConversion, CreateQuotedConversion, MarginType, MarginsResponse, UserMargin,
};
pub use pay_in::{
    PayIn, PayInBankAccount, PayInExecutionDetails, PayInExecutionDetailsDirect,
    PayInExecutionDetailsWeb, PayInPaymentDetails, PayInPaymentDetailsBankWire,
    PayInPaymentDetailsCard, PayInPaymentDetailsDirectDebit, PayInPaymentDetailsPreAuthorized,
};
pub use pay_out::{
    InstantPayout, PayOut, PayOutEligibilityRequest, PayOutEligibilityResponse,
    PayOutPaymentDetails, PayOutPaymentDetailsBankWire, PayoutMode, PayoutModeApplied,
    RecipientVerificationOfPayee,
};
pub use refund::{CreateRefund, FilterRefunds, Refund, RefundReason};
pub use response::IdempotencyResponse;
pub use settlement::{
    Settlement, SettlementStatus, SettlementValidation, SettlementValidationFooter,
    SettlementValidationLine,
};
pub use user::{
    ConsentScope, KycLevel, LegalPersonType, PendingUserAction, PersonType, ScaStatus, User,
    UserCategory, UserConsent, UserEnrollmentResult, UserLegal, UserNatural,
};
pub use virtual_account::{
    VirtualAccount, VirtualAccountCapabilities, VirtualAccountDetails, VirtualAccountNumber,
    VirtualAccountPurpose, VirtualAccountStatus,
};
pub use wallet::Wallet;
