//! Accessor and transport behaviour against a mock BlinkPay server.

use std::sync::Arc;
use std::time::Duration;

use blinkdebit::api::{MetadataApi, PaymentsApi, QuickPaymentsApi, SingleConsentsApi};
use blinkdebit::{
    Amount, ApiTransport, AuthFlow, Bank, BlinkPayConfig, BlinkPayError, ConsentStatus,
    PaymentRequest, PaymentStatus, Pcr, QuickPaymentRequest,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_token(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_partial_json(json!({
            "client_id": "test-client",
            "client_secret": "test-secret",
            "grant_type": "client_credentials"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "create:single_consent view:payment"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn transport(server: &MockServer) -> Arc<ApiTransport> {
    let config = BlinkPayConfig::new(server.uri(), "test-client", "test-secret");
    Arc::new(ApiTransport::new(&config).unwrap())
}

fn consent_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "consent_id": id,
        "status": status,
        "creation_timestamp": "2024-03-01T09:15:00Z",
        "status_updated_timestamp": "2024-03-01T09:15:01Z",
        "detail": {"type": "single"},
        "payments": [],
        "refunds": []
    })
}

#[tokio::test]
async fn token_is_fetched_once_and_reused() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/payments/v1/single-consents/c-1"))
        .and(header("authorization", "Bearer tok-123"))
        .and(header_exists("request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(consent_json("c-1", "Authorised")))
        .expect(2)
        .mount(&server)
        .await;

    let api = SingleConsentsApi::new(transport(&server));
    let first = api.get("c-1").await.unwrap();
    let second = api.get("c-1").await.unwrap();

    assert_eq!(first.status, ConsentStatus::Authorised);
    assert_eq!(second.consent_id, "c-1");
}

#[tokio::test]
async fn post_sends_idempotency_key_and_body() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/payments/v1/quick-payments"))
        .and(header_exists("idempotency-key"))
        .and(body_partial_json(json!({
            "amount": {"currency": "NZD", "total": "12.50"},
            "flow": {"detail": {"type": "redirect", "bank": "PNZ"}}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "quick_payment_id": "q-1",
            "redirect_uri": "https://bank.example/authorise"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = QuickPaymentsApi::new(transport(&server));
    let request = QuickPaymentRequest {
        flow: AuthFlow::redirect(Bank::Pnz, "https://shop.example/return"),
        pcr: Pcr {
            particulars: "coffee".to_string(),
            code: None,
            reference: Some("order-42".to_string()),
        },
        amount: Amount::nzd("12.50"),
    };
    let created = api.create(&request).await.unwrap();

    assert_eq!(created.quick_payment_id, "q-1");
    assert_eq!(
        created.redirect_uri.as_deref(),
        Some("https://bank.example/authorise")
    );
}

#[tokio::test]
async fn revoke_accepts_empty_no_content() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("DELETE"))
        .and(path("/payments/v1/quick-payments/q-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = QuickPaymentsApi::new(transport(&server));
    api.revoke("q-1").await.unwrap();
}

#[tokio::test]
async fn reserved_characters_stay_inside_the_id_segment() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("DELETE"))
        .and(path("/payments/v1/quick-payments/Q1%3Fother%3D1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/payments/v1/quick-payments/Q1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payments/v1/single-consents/c%2F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(consent_json("c/1", "Authorised")))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server);
    QuickPaymentsApi::new(transport.clone())
        .revoke("Q1?other=1")
        .await
        .unwrap();
    let consent = SingleConsentsApi::new(transport).get("c/1").await.unwrap();
    assert_eq!(consent.consent_id, "c/1");
}

#[tokio::test]
async fn not_found_maps_to_typed_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/payments/v1/payments/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "payment not found"})),
        )
        .mount(&server)
        .await;

    let api = PaymentsApi::new(transport(&server));
    match api.get("missing").await {
        Err(BlinkPayError::NotFound(message)) => assert_eq!(message, "payment not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_credentials_surface_as_unauthorised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Client authentication failed"
        })))
        .mount(&server)
        .await;

    let api = PaymentsApi::new(transport(&server));
    let err = api.get("p-1").await.unwrap_err();
    assert!(matches!(err, BlinkPayError::Unauthorised(_)), "{err}");
}

#[tokio::test]
async fn blank_ids_never_reach_the_network() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;

    let transport = transport(&server);
    let consents = SingleConsentsApi::new(transport.clone());
    let payments = PaymentsApi::new(transport);

    assert!(matches!(
        consents.get("  ").await,
        Err(BlinkPayError::InvalidValue(_))
    ));
    assert!(matches!(
        payments.create(&PaymentRequest::single("")).await,
        Err(BlinkPayError::InvalidValue(_))
    ));
}

#[tokio::test]
async fn payment_and_metadata_decode() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/payments/v1/payments/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payment_id": "p-1",
            "type": "single",
            "status": "AcceptedSettlementInProcess",
            "creation_timestamp": "2024-03-01T09:15:00Z",
            "status_updated_timestamp": "2024-03-01T09:15:03Z",
            "detail": {"consent_id": "c-1"},
            "refunds": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payments/v1/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "PNZ", "payment_limit": {"currency": "NZD", "total": "50000"}, "features": {}},
            {"name": "BNZ", "features": {"decoupled_flow": {"enabled": true}}}
        ])))
        .mount(&server)
        .await;

    let transport = transport(&server);
    let payment = PaymentsApi::new(transport.clone()).get("p-1").await.unwrap();
    assert_eq!(payment.status, PaymentStatus::AcceptedSettlementInProcess);

    let banks = MetadataApi::new(transport).get().await.unwrap();
    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].name, Bank::Pnz);
    assert!(banks[1].payment_limit.is_none());
}

#[tokio::test]
async fn concurrent_callers_share_one_token_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-123", "expires_in": 3600}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server);
    let tokens = transport.tokens();
    let (a, b, c) = tokio::join!(
        tokens.access_token(),
        tokens.access_token(),
        tokens.access_token()
    );

    assert_eq!(a.unwrap(), "tok-123");
    assert_eq!(b.unwrap(), "tok-123");
    assert_eq!(c.unwrap(), "tok-123");
}

#[tokio::test]
async fn short_lived_token_is_refreshed() {
    let server = MockServer::start().await;
    // Lifetime below the refresh margin: every call needs a new token.
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "short",
            "expires_in": 30
        })))
        .expect(2)
        .mount(&server)
        .await;

    let transport = transport(&server);
    assert_eq!(transport.tokens().access_token().await.unwrap(), "short");
    assert_eq!(transport.tokens().access_token().await.unwrap(), "short");
}

#[tokio::test]
async fn invalidate_forces_new_token() {
    let server = MockServer::start().await;
    mount_token(&server, 2).await;

    let transport = transport(&server);
    transport.tokens().access_token().await.unwrap();
    transport.tokens().access_token().await.unwrap();
    transport.tokens().invalidate().await;
    assert_eq!(transport.tokens().access_token().await.unwrap(), "tok-123");
}
