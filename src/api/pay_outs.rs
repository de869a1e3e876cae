use crate::error::{SdkError, SdkResult};
use crate::models::{
    FilterRefunds, PayOut, PayOutEligibilityRequest, PayOutEligibilityResponse, PayOutPaymentDetails, Refund,
};
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey, Page, Pagination, Sorting};

/// Bank wire pay-outs from a wallet to a registered bank account
#[derive(Clone)]
pub struct ApiPayOuts {
    executor: ApiExecutor,
}

impl ApiPayOuts {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    pub async fn create(&self, pay_out: &PayOut, idempotency_key: Option<&IdempotencyKey>) -> SdkResult<PayOut> {
        match pay_out.payment_details {
            PayOutPaymentDetails::BankWire(_) => {
                self.executor
                    .create(Endpoint::PayOutBankWireCreate, &[], pay_out, idempotency_key)
                    .await
            }
            PayOutPaymentDetails::Unknown => Err(SdkError::invalid_request(
                "Pay-out payment type must be BANK_WIRE",
            )),
        }
    }

    pub async fn get(&self, pay_out_id: &str) -> SdkResult<PayOut> {
        self.executor.get(Endpoint::PayOutGet, &[pay_out_id]).await
    }

    /// Same as [`get`](Self::get) with the bank-wire specific fields filled in
    pub async fn get_bankwire(&self, pay_out_id: &str) -> SdkResult<PayOut> {
        self.executor
            .get(Endpoint::PayOutBankWireGet, &[pay_out_id])
            .await
    }

    /// Checks whether the destination account can receive an instant payment
    pub async fn check_instant_payout_eligibility(
        &self,
        request: &PayOutEligibilityRequest,
    ) -> SdkResult<PayOutEligibilityResponse> {
        self.executor
            .create(Endpoint::PayOutEligibilityCheck, &[], request, None)
            .await
    }

    pub async fn get_refunds(
        &self,
        pay_out_id: &str,
        pagination: &Pagination,
        sorting: Option<&Sorting>,
        filter: &FilterRefunds,
    ) -> SdkResult<Page<Refund>> {
        self.executor
            .list(Endpoint::PayOutRefundList, &[pay_out_id], pagination, sorting, filter)
            .await
    }
}
