use std::sync::Mutex;

use chrono::{Duration, Utc};

use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::api::{OAuthCredentials, Token};
use crate::connectors::paypal::token::TokenProvider;

pub const MOCK_ACCESS_TOKEN: &str = "A21AAFEpH4PsADK7qSS7pSRsgzfENtu";

/// Mock token provider for testing - always hands out the same bearer token
/// and records the base URLs it was asked for.
#[derive(Default)]
pub struct MockTokenProvider {
    requested_base_urls: Mutex<Vec<String>>,
}

impl MockTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token() -> Token {
        Token {
            scope: Some("https://uri.paypal.com/services/payments/payment".to_string()),
            access_token: Some(MOCK_ACCESS_TOKEN.to_string()),
            token_type: Some("Bearer".to_string()),
            app_id: Some("APP-80W284485P519543T".to_string()),
            expires_in: Some(32400),
            expire_date_time: Some(Utc::now() + Duration::seconds(32400)),
            ..Token::default()
        }
    }

    pub fn requested_base_urls(&self) -> Vec<String> {
        self.requested_base_urls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl TokenProvider for MockTokenProvider {
    fn get_token(
        &self,
        _credentials: &OAuthCredentials,
        base_url: &str,
    ) -> Result<Token, PayPalError> {
        self.requested_base_urls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(base_url.to_string());
        Ok(Self::token())
    }
}
