use std::time::Duration;

use chrono::Utc;
use reqwest::header::AUTHORIZATION;

use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::api::{OAuthCredentials, Token};
use crate::connectors::paypal::mapper::PayPalStruct;
use crate::connectors::paypal::resource_url;
use crate::connectors::paypal::response::read_response;

/// Token endpoint, relative to the API root.
pub const TOKEN_RESOURCE: &str = "oauth2/token";

/// Abstraction over the call to the OAuth token endpoint.
/// Production uses `HttpTokenClient`; tests can inject a mock.
pub trait TokenClient: Send + Sync {
    fn fetch_token(
        &self,
        credentials: &OAuthCredentials,
        base_url: &str,
    ) -> Result<Token, PayPalError>;
}

/// Client credentials grant using `reqwest::blocking`.
pub struct HttpTokenClient {
    http: reqwest::blocking::Client,
}

impl HttpTokenClient {
    pub fn new(timeout_secs: u64) -> Result<Self, PayPalError> {
        let mut builder = reqwest::blocking::Client::builder();
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let http = builder.build().map_err(PayPalError::Transport)?;
        Ok(Self { http })
    }
}

impl TokenClient for HttpTokenClient {
    fn fetch_token(
        &self,
        credentials: &OAuthCredentials,
        base_url: &str,
    ) -> Result<Token, PayPalError> {
        let _span = tracing::debug_span!("paypal_oauth_token", base_url = base_url).entered();

        let request = self
            .http
            .post(resource_url(base_url, TOKEN_RESOURCE))
            .header(AUTHORIZATION, credentials.basic_authorization())
            .form(&[("grant_type", "client_credentials")]);

        let wire = read_response(request, None)?;
        let mut token = Token::from_wire(wire)?;
        token.start_expiry_clock(Utc::now())?;

        tracing::debug!(
            app_id = token.app_id.as_deref().unwrap_or_default(),
            expires_in = token.expires_in.unwrap_or_default(),
            "Fetched PayPal access token"
        );

        Ok(token)
    }
}
