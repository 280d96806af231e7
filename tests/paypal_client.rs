//! Integration tests for `PayPalClient` against a local mock server.

mod common;

use mockito::Matcher;
use serde_json::json;
use swag_paypal::connectors::paypal::api::{Amount, Patch, Payer, Payment, Transaction};
use swag_paypal::connectors::paypal::mock::{MockTokenProvider, MOCK_ACCESS_TOKEN};
use swag_paypal::connectors::{
    BaseUrl, PartnerAttributionId, PayPalClient, PayPalError, PayPalSettings,
};

fn bearer() -> String {
    format!("Bearer {}", MOCK_ACCESS_TOKEN)
}

#[test]
fn test_construction_requires_client_id() {
    let provider = MockTokenProvider::new();
    let settings = PayPalSettings::new("", "", false);

    let err = PayPalClient::new(&provider, &settings, PartnerAttributionId::PAYPAL_CLASSIC)
        .err()
        .unwrap();

    assert!(matches!(err, PayPalError::Configuration { field: "clientId" }));
    assert!(provider.requested_base_urls().is_empty());
}

#[test]
fn test_construction_requires_client_secret() {
    let provider = MockTokenProvider::new();
    let settings = PayPalSettings::new("client-id", "", false);

    let err = PayPalClient::new(&provider, &settings, PartnerAttributionId::PAYPAL_CLASSIC)
        .err()
        .unwrap();

    assert!(matches!(err, PayPalError::Configuration { field: "clientSecret" }));
    assert!(format!("{}", err).contains("clientSecret"));
}

#[test]
fn test_sandbox_and_live_base_urls() {
    let provider = MockTokenProvider::new();

    let sandbox = PayPalClient::new(
        &provider,
        &PayPalSettings::new("client-id", "client-secret", true),
        PartnerAttributionId::PAYPAL_CLASSIC,
    )
    .unwrap();
    let live = PayPalClient::new(
        &provider,
        &PayPalSettings::new("client-id", "client-secret", false),
        PartnerAttributionId::PAYPAL_CLASSIC,
    )
    .unwrap();

    assert_eq!(sandbox.base_url(), BaseUrl::SANDBOX);
    assert_eq!(live.base_url(), BaseUrl::LIVE);
    assert_eq!(
        provider.requested_base_urls(),
        vec![BaseUrl::SANDBOX.to_string(), BaseUrl::LIVE.to_string()]
    );
}

#[test]
fn test_get_sends_token_and_partner_attribution() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/payments/payment/PAY-1")
        .match_header("authorization", bearer().as_str())
        .match_header("paypal-partner-attribution-id", "Shopware_Cart_EC_6native")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"PAY-1","state":"created","intent":"sale"}"#)
        .create();

    let client = common::client_for(&server.url());
    let response = client.get("payments/payment/PAY-1").unwrap();

    mock.assert();
    assert_eq!(response["id"], "PAY-1");
    assert_eq!(response["state"], "created");
}

#[test]
fn test_partner_attribution_id_is_configurable() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/payments/payment/PAY-1")
        .match_header("paypal-partner-attribution-id", "Shopware_Cart_Plus_6native")
        .with_status(200)
        .with_body("{}")
        .create();

    let client = PayPalClient::with_base_url(
        &MockTokenProvider::new(),
        &common::settings(),
        &server.url(),
        PartnerAttributionId::PAYPAL_PLUS,
    )
    .unwrap();
    client.get("payments/payment/PAY-1").unwrap();

    mock.assert();
}

#[test]
fn test_post_serializes_struct_as_snake_case_json() {
    let payment = Payment {
        intent: Some("sale".to_string()),
        payer: Some(Payer {
            payment_method: Some("paypal".to_string()),
            ..Payer::default()
        }),
        transactions: Some(vec![Transaction {
            amount: Some(Amount {
                total: Some("10.00".to_string()),
                currency: Some("EUR".to_string()),
                ..Amount::default()
            }),
            ..Transaction::default()
        }]),
        ..Payment::default()
    };
    let expected_body = serde_json::to_value(&payment).unwrap();
    assert_eq!(expected_body["payer"]["payment_method"], "paypal");
    assert_eq!(expected_body["transactions"][0]["amount"]["total"], "10.00");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/payments/payment")
        .match_header("content-type", "application/json")
        .match_header("authorization", bearer().as_str())
        .match_body(Matcher::Json(expected_body))
        .with_status(201)
        .with_body(r#"{"id":"PAY-2","state":"created"}"#)
        .create();

    let client = common::client_for(&server.url());
    let response = client.post("payments/payment", &payment).unwrap();

    mock.assert();
    assert_eq!(response["id"], "PAY-2");
}

#[test]
fn test_patch_sends_sequence_of_structs() {
    let patches = [
        Patch::replace("/transactions/0/amount", json!({"total": "12.00", "currency": "EUR"})),
        Patch::add("/transactions/0/invoice_number", json!("10001")),
    ];

    let mut server = mockito::Server::new();
    let mock = server
        .mock("PATCH", "/payments/payment/PAY-1")
        .match_body(Matcher::Json(json!([
            {
                "op": "replace",
                "path": "/transactions/0/amount",
                "value": {"total": "12.00", "currency": "EUR"}
            },
            {"op": "add", "path": "/transactions/0/invoice_number", "value": "10001"}
        ])))
        .with_status(200)
        .with_body(r#"{"id":"PAY-1"}"#)
        .create();

    let client = common::client_for(&server.url());
    let response = client.patch("payments/payment/PAY-1", &patches).unwrap();

    mock.assert();
    assert_eq!(response["id"], "PAY-1");
}

#[test]
fn test_empty_success_body_is_empty_mapping() {
    let mut server = mockito::Server::new();
    server
        .mock("PATCH", "/notifications/webhooks/WH-1")
        .with_status(204)
        .create();

    let client = common::client_for(&server.url());
    let response = client
        .patch(
            "notifications/webhooks/WH-1",
            &[Patch::replace("/url", json!("https://shop.example/hook"))],
        )
        .unwrap();

    assert!(response.is_empty());
}

#[test]
fn test_non_object_success_body_is_invalid_response() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/payments/payment")
        .with_status(200)
        .with_body("[1, 2, 3]")
        .create();

    let client = common::client_for(&server.url());
    let err = client.get("payments/payment").unwrap_err();

    assert!(matches!(err, PayPalError::InvalidResponse(_)));
}

#[test]
fn test_validation_error_is_translated_and_logged_once() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/payments/payment")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"name":"VALIDATION_ERROR","message":"Invalid request","details":[{"issue":"required","field":"amount"}]}"#,
        )
        .create();

    let client = common::client_for(&server.url());
    let (result, errors) =
        common::count_error_logs(|| client.post("payments/payment", &Payment::default()));

    let err = result.unwrap_err();
    assert_eq!(errors, 1);
    assert_eq!(err.api_error_name(), Some("VALIDATION_ERROR"));
    match err {
        PayPalError::Api(api_error) => {
            assert_eq!(api_error.status, 400);
            assert_eq!(api_error.message, "Invalid request: required (amount)");
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[test]
fn test_not_found_error_keeps_provider_name() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/payments/payment/PAY-404")
        .with_status(404)
        .with_body(r#"{"name":"INVALID_RESOURCE_ID","message":"The requested resource ID was not found"}"#)
        .create();

    let client = common::client_for(&server.url());
    let err = client.get("payments/payment/PAY-404").unwrap_err();

    assert_eq!(err.api_error_name(), Some("INVALID_RESOURCE_ID"));
    assert!(format!("{}", err).contains("The requested resource ID was not found"));
}

#[test]
fn test_non_json_error_body() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/payments/payment/PAY-1")
        .with_status(503)
        .with_body("Service Unavailable")
        .create();

    let client = common::client_for(&server.url());
    let err = client.get("payments/payment/PAY-1").unwrap_err();

    assert_eq!(err.api_error_name(), Some("HTTP_503"));
}

#[test]
fn test_transport_failure_is_propagated_and_logged_once() {
    let client = common::client_for(&common::unreachable_base_url());

    let (result, errors) = common::count_error_logs(|| client.get("payments/payment/PAY-1"));

    assert_eq!(errors, 1);
    match result.unwrap_err() {
        PayPalError::Transport(err) => assert!(err.is_connect()),
        other => panic!("expected a transport error, got {:?}", other),
    }
}
