//! Integration tests for the OAuth token endpoint client and the token cache.

use chrono::Utc;
use mockito::Matcher;
use swag_paypal::connectors::paypal::api::OAuthCredentials;
use swag_paypal::connectors::paypal::{
    HttpTokenClient, InMemoryTokenCache, TokenClient, TokenProvider, TokenResource,
};
use swag_paypal::connectors::PayPalError;

const TOKEN_RESPONSE: &str = r#"{
    "scope": "https://uri.paypal.com/services/payments/payment https://uri.paypal.com/services/applications/webhooks",
    "access_token": "A21AAFEpH4PsADK7qSS7pSRsgzfENtu",
    "token_type": "Bearer",
    "app_id": "APP-80W284485P519543T",
    "expires_in": 32400,
    "nonce": "2020-04-03T15:35:36ZaYZlGvEkV4yVSz8g6bAKFoGSEzuy3CQcz3ljhibkOHg"
}"#;

fn credentials() -> OAuthCredentials {
    OAuthCredentials::new("id", "secret")
}

#[test]
fn test_client_credentials_grant() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/oauth2/token")
        .match_header("authorization", "Basic aWQ6c2VjcmV0")
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "client_credentials".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_RESPONSE)
        .create();

    let client = HttpTokenClient::new(30).unwrap();
    let token = client.fetch_token(&credentials(), &server.url()).unwrap();

    mock.assert();
    assert_eq!(token.access_token.as_deref(), Some("A21AAFEpH4PsADK7qSS7pSRsgzfENtu"));
    assert_eq!(token.app_id.as_deref(), Some("APP-80W284485P519543T"));
    assert_eq!(token.expires_in, Some(32400));
    assert!(token.is_valid_at(Utc::now()));
    assert_eq!(
        token.authorization_value().as_deref(),
        Some("Bearer A21AAFEpH4PsADK7qSS7pSRsgzfENtu")
    );
}

#[test]
fn test_token_is_fetched_once_while_valid() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_body(TOKEN_RESPONSE)
        .expect(1)
        .create();

    let resource =
        TokenResource::new(InMemoryTokenCache::new(), HttpTokenClient::new(30).unwrap());
    let first = resource.get_token(&credentials(), &server.url()).unwrap();
    let second = resource.get_token(&credentials(), &server.url()).unwrap();

    mock.assert();
    assert_eq!(first, second);
}

#[test]
fn test_rejected_credentials() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/oauth2/token")
        .with_status(401)
        .with_body(
            r#"{"error":"invalid_client","error_description":"Client Authentication failed"}"#,
        )
        .create();

    let resource =
        TokenResource::new(InMemoryTokenCache::new(), HttpTokenClient::new(30).unwrap());
    let err = resource.get_token(&credentials(), &server.url()).unwrap_err();

    assert_eq!(err.api_error_name(), Some("invalid_client"));
    assert!(format!("{}", err).contains("Client Authentication failed"));
    assert!(resource.cache().is_empty());
}

#[test]
fn test_out_of_range_expiry_is_invalid_response() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_body(r#"{"access_token":"A","token_type":"Bearer","expires_in":9000000000000}"#)
        .create();

    let resource =
        TokenResource::new(InMemoryTokenCache::new(), HttpTokenClient::new(30).unwrap());
    let err = resource.get_token(&credentials(), &server.url()).unwrap_err();

    assert!(matches!(err, PayPalError::InvalidResponse(_)));
    assert!(resource.cache().is_empty());
}
