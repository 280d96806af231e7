//! OAuth token acquisition.
//!
//! [`TokenResource`] answers from a [`TokenCache`] while the cached token is still
//! valid and falls back to a [`TokenClient`] otherwise.

mod cache;
mod client;

pub use cache::{InMemoryTokenCache, TokenCache};
pub use client::{HttpTokenClient, TokenClient, TOKEN_RESOURCE};

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::api::{OAuthCredentials, Token};

/// Supplies an access token for a set of credentials.
pub trait TokenProvider: Send + Sync {
    fn get_token(
        &self,
        credentials: &OAuthCredentials,
        base_url: &str,
    ) -> Result<Token, PayPalError>;
}

pub struct TokenResource<C: TokenCache, T: TokenClient> {
    cache: C,
    client: T,
}

impl<C: TokenCache, T: TokenClient> TokenResource<C, T> {
    pub const CACHE_ID: &'static str = "swag_paypal_token_";

    pub fn new(cache: C, client: T) -> Self {
        Self { cache, client }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Cache key for the credentials; the secret never appears in clear.
    pub fn cache_id(credentials: &OAuthCredentials) -> String {
        let digest = Sha256::digest(credentials.basic_authorization().as_bytes());
        format!("{}{:x}", Self::CACHE_ID, digest)
    }
}

impl TokenResource<InMemoryTokenCache, HttpTokenClient> {
    /// Process-local cache in front of the PayPal token endpoint.
    pub fn in_memory(timeout_secs: u64) -> Result<Self, PayPalError> {
        Ok(Self::new(
            InMemoryTokenCache::new(),
            HttpTokenClient::new(timeout_secs)?,
        ))
    }
}

impl<C: TokenCache, T: TokenClient> TokenProvider for TokenResource<C, T> {
    fn get_token(
        &self,
        credentials: &OAuthCredentials,
        base_url: &str,
    ) -> Result<Token, PayPalError> {
        let cache_id = Self::cache_id(credentials);

        if let Some(token) = self.cache.get(&cache_id) {
            if token.is_valid_at(Utc::now()) {
                tracing::trace!("Using cached PayPal access token");
                return Ok(token);
            }
        }

        let token = self.client.fetch_token(credentials, base_url)?;
        self.cache.save(&cache_id, &token);

        Ok(token)
    }
}
