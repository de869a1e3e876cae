//! Pay-ins and their refunds.

use crate::error::{SdkError, SdkResult};
use crate::models::{CreateRefund, FilterRefunds, PayIn, PayInExecutionDetails, PayInPaymentDetails, Refund};
use crate::rest::{ApiExecutor, Endpoint, IdempotencyKey, Page, Pagination, Sorting};

#[derive(Clone)]
pub struct ApiPayIns {
    executor: ApiExecutor,
}

impl ApiPayIns {
    pub fn new(executor: ApiExecutor) -> Self {
        Self { executor }
    }

    /// Creates a pay-in on the endpoint matching its payment and execution types.
    ///
    /// # Errors
    /// [`SdkError::InvalidRequest`] for combinations the API does not offer,
    /// without any request being sent.
    pub async fn create(&self, pay_in: &PayIn, idempotency_key: Option<&IdempotencyKey>) -> SdkResult<PayIn> {
        let endpoint = create_endpoint(&pay_in.payment_details, &pay_in.execution_details)?;
        self.executor
            .create(endpoint, &[], pay_in, idempotency_key)
            .await
    }

    pub async fn get(&self, pay_in_id: &str) -> SdkResult<PayIn> {
        self.executor.get(Endpoint::PayInGet, &[pay_in_id]).await
    }

    pub async fn create_refund(
        &self,
        pay_in_id: &str,
        refund: &CreateRefund,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> SdkResult<Refund> {
        self.executor
            .create(Endpoint::PayInRefundCreate, &[pay_in_id], refund, idempotency_key)
            .await
    }

    pub async fn get_refunds(
        &self,
        pay_in_id: &str,
        pagination: &Pagination,
        sorting: Option<&Sorting>,
        filter: &FilterRefunds,
    ) -> SdkResult<Page<Refund>> {
        self.executor
            .list(Endpoint::PayInRefundList, &[pay_in_id], pagination, sorting, filter)
            .await
    }
}

fn create_endpoint(
    payment: &PayInPaymentDetails,
    execution: &PayInExecutionDetails,
) -> SdkResult<Endpoint> {
    use PayInExecutionDetails as E;
    use PayInPaymentDetails as P;

    match (payment, execution) {
        (P::Card(_), E::Web(_)) => Ok(Endpoint::PayInCardWebCreate),
        (P::Card(_), E::Direct(_)) => Ok(Endpoint::PayInCardDirectCreate),
        (P::BankWire(_), E::Direct(_)) => Ok(Endpoint::PayInBankWireDirectCreate),
        (P::DirectDebit(_), E::Web(_)) => Ok(Endpoint::PayInDirectDebitWebCreate),
        (P::DirectDebit(_), E::Direct(_)) => Ok(Endpoint::PayInDirectDebitDirectCreate),
        (P::PreAuthorized(_), E::Direct(_)) => Ok(Endpoint::PayInPreAuthorizedDirectCreate),
        _ => Err(SdkError::invalid_request(format!(
            "Unsupported pay-in combination: {} / {}",
            payment_type_name(payment),
            execution_type_name(execution)
        ))),
    }
}

fn payment_type_name(payment: &PayInPaymentDetails) -> &'static str {
    match payment {
        PayInPaymentDetails::Card(_) => "CARD",
        PayInPaymentDetails::BankWire(_) => "BANK_WIRE",
        PayInPaymentDetails::DirectDebit(_) => "DIRECT_DEBIT",
        PayInPaymentDetails::PreAuthorized(_) => "PREAUTHORIZED",
        PayInPaymentDetails::Unknown => "UNKNOWN",
    }
}

fn execution_type_name(execution: &PayInExecutionDetails) -> &'static str {
    match execution {
        PayInExecutionDetails::Web(_) => "WEB",
        PayInExecutionDetails::Direct(_) => "DIRECT",
        PayInExecutionDetails::Unknown => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CurrencyIso, Money, PayInExecutionDetailsDirect, PayInExecutionDetailsWeb,
        PayInPaymentDetailsBankWire, PayInPaymentDetailsCard, PayInPaymentDetailsDirectDebit,
        PayInPaymentDetailsPreAuthorized, TransactionStatus,
    };
    use crate::testing::{MockResponse, MockServer};
    use reqwest::Method;
    use serde_json::json;

    fn web() -> PayInExecutionDetails {
        PayInExecutionDetails::Web(PayInExecutionDetailsWeb {
            return_url: Some("https://example.com/return".into()),
            culture: Some("EN".into()),
            ..Default::default()
        })
    }

    fn direct() -> PayInExecutionDetails {
        PayInExecutionDetails::Direct(PayInExecutionDetailsDirect::default())
    }

    fn pay_in(payment: PayInPaymentDetails, execution: PayInExecutionDetails) -> PayIn {
        PayIn::new(
            "u_1",
            "w_1",
            Money::new(CurrencyIso::Eur, 1000),
            Money::new(CurrencyIso::Eur, 0),
            payment,
            execution,
        )
    }

    #[test]
    fn test_endpoint_selection() {
        let card = PayInPaymentDetails::Card(PayInPaymentDetailsCard::default());
        let wire = PayInPaymentDetails::BankWire(PayInPaymentDetailsBankWire::default());
        let debit = PayInPaymentDetails::DirectDebit(PayInPaymentDetailsDirectDebit::default());
        let preauth = PayInPaymentDetails::PreAuthorized(PayInPaymentDetailsPreAuthorized::default());

        let cases = [
            (&card, web(), Endpoint::PayInCardWebCreate),
            (&card, direct(), Endpoint::PayInCardDirectCreate),
            (&wire, direct(), Endpoint::PayInBankWireDirectCreate),
            (&debit, web(), Endpoint::PayInDirectDebitWebCreate),
            (&debit, direct(), Endpoint::PayInDirectDebitDirectCreate),
            (&preauth, direct(), Endpoint::PayInPreAuthorizedDirectCreate),
        ];
        for (payment, execution, expected) in cases {
            assert_eq!(create_endpoint(payment, &execution).unwrap(), expected);
        }
    }

    #[test]
    fn test_unsupported_combinations() {
        let wire = PayInPaymentDetails::BankWire(PayInPaymentDetailsBankWire::default());
        let err = create_endpoint(&wire, &web()).unwrap_err();
        assert!(err.to_string().contains("BANK_WIRE / WEB"));

        let preauth = PayInPaymentDetails::PreAuthorized(PayInPaymentDetailsPreAuthorized::default());
        assert!(create_endpoint(&preauth, &web()).is_err());
        assert!(create_endpoint(&PayInPaymentDetails::Unknown, &direct()).is_err());
    }

    #[tokio::test]
    async fn test_create_card_web() {
        let server = MockServer::start().await;
        server.mock(
            Method::POST,
            "/v2.01/test-client/payins/card/web",
            MockResponse::json(
                200,
                json!({
                    "Id": "pi_1",
                    "Status": "CREATED",
                    "PaymentType": "CARD",
                    "ExecutionType": "WEB",
                    "RedirectURL": "https://pay.example.com/pi_1"
                }),
            ),
        );

        let created = server
            .api()
            .pay_ins()
            .create(
                &pay_in(PayInPaymentDetails::Card(PayInPaymentDetailsCard::default()), web()),
                Some(&IdempotencyKey::generate()),
            )
            .await
            .unwrap();

        assert_eq!(created.status, Some(TransactionStatus::Created));
        match created.execution_details {
            PayInExecutionDetails::Web(web) => assert!(web.redirect_url.is_some()),
            other => panic!("Expected web execution, got {:?}", other),
        }
        let body = server.requests()[0].body_json();
        assert_eq!(body["ReturnURL"], "https://example.com/return");
        assert_eq!(body["ExecutionType"], "WEB");
    }

    #[tokio::test]
    async fn test_unsupported_create_sends_nothing() {
        let server = MockServer::start().await;
        let err = server
            .api()
            .pay_ins()
            .create(
                &pay_in(
                    PayInPaymentDetails::BankWire(PayInPaymentDetailsBankWire::default()),
                    web(),
                ),
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidRequest { .. }));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_refunds() {
        let server = MockServer::start().await;
        server.mock(
            Method::POST,
            "/v2.01/test-client/payins/pi_1/refunds",
            MockResponse::json(200, json!({"Id": "rf_1", "Nature": "REFUND", "InitialTransactionId": "pi_1"})),
        );
        server.mock(
            Method::GET,
            "/v2.01/test-client/payins/pi_1/refunds",
            MockResponse::json(200, json!([{"Id": "rf_1"}])).with_header("x-number-of-items", "1"),
        );

        let pay_ins = server.api().pay_ins();
        let refund = pay_ins
            .create_refund(
                "pi_1",
                &CreateRefund {
                    author_id: "u_1".into(),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(refund.initial_transaction_id.as_deref(), Some("pi_1"));

        let filter = FilterRefunds {
            status: Some(TransactionStatus::Succeeded),
            ..Default::default()
        };
        let page = pay_ins
            .get_refunds("pi_1", &Pagination::default(), None, &filter)
            .await
            .unwrap();
        assert_eq!(page.pagination.total_items, Some(1));
        assert_eq!(page.pagination.total_pages, Some(1));
        assert_eq!(server.requests()[1].query_param("Status").as_deref(), Some("SUCCEEDED"));
    }
}
