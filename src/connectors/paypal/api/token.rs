use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Duration, Utc};

use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::mapper::paypal_struct;

paypal_struct! {
    /// OAuth2 access token as returned by `POST /v1/oauth2/token`.
    ///
    /// `expireDateTime` is not sent by PayPal; it is derived from `expiresIn` when the
    /// token is fetched and travels with the token through the cache.
    pub struct Token {
        scope ("scope"): scalar String,
        nonce ("nonce"): scalar String,
        access_token ("accessToken"): scalar String,
        token_type ("tokenType"): scalar String,
        app_id ("appId"): scalar String,
        expires_in ("expiresIn"): scalar i64,
        expire_date_time ("expireDateTime"): scalar DateTime<Utc>,
    }
}

impl Token {
    /// Tokens are dropped an hour before PayPal expires them.
    pub const EXPIRY_MARGIN_SECS: i64 = 3600;

    /// Fix the absolute expiry relative to `now`.
    ///
    /// An `expiresIn` that does not fit the calendar is an invalid token response.
    pub fn start_expiry_clock(&mut self, now: DateTime<Utc>) -> Result<(), PayPalError> {
        let Some(expires_in) = self.expires_in else {
            self.expire_date_time = None;
            return Ok(());
        };

        let expire_date_time = Duration::try_seconds(expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                let err = PayPalError::InvalidResponse(format!(
                    "token expires_in {} is out of range",
                    expires_in
                ));
                tracing::error!("{}", err);
                err
            })?;

        self.expire_date_time = Some(expire_date_time);
        Ok(())
    }

    /// True while the token can still be used at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_date_time
            .and_then(|expire_date_time| {
                expire_date_time.checked_sub_signed(Duration::seconds(Self::EXPIRY_MARGIN_SECS))
            })
            .map_or(false, |usable_until| usable_until > now)
    }

    /// `Authorization` header value, `None` when PayPal sent no access token.
    pub fn authorization_value(&self) -> Option<String> {
        let access_token = self.access_token.as_deref()?;
        let token_type = self.token_type.as_deref().unwrap_or("Bearer");
        Some(format!("{} {}", token_type, access_token))
    }
}

/// REST app credentials from the plugin settings.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub rest_id: String,
    pub rest_secret: String,
}

impl OAuthCredentials {
    pub fn new(rest_id: impl Into<String>, rest_secret: impl Into<String>) -> Self {
        Self {
            rest_id: rest_id.into(),
            rest_secret: rest_secret.into(),
        }
    }

    /// HTTP Basic value used against the token endpoint.
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.rest_id, self.rest_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("rest_id", &self.rest_id)
            .field("rest_secret", &"***")
            .finish()
    }
}
