use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde_json::Value;

use crate::connectors::config::PayPalSettings;
use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::api::OAuthCredentials;
use crate::connectors::paypal::mapper::{PayPalStruct, WireMap};
use crate::connectors::paypal::response::read_response;
use crate::connectors::paypal::token::TokenProvider;
use crate::connectors::paypal::{resource_url, BaseUrl};

pub const PARTNER_ATTRIBUTION_HEADER: &str = "paypal-partner-attribution-id";

/// Validate the REST credentials of the settings.
pub fn credentials_from(settings: &PayPalSettings) -> Result<OAuthCredentials, PayPalError> {
    let missing = if settings.client_id.is_empty() {
        Some("clientId")
    } else if settings.client_secret.is_empty() {
        Some("clientSecret")
    } else {
        None
    };

    if let Some(field) = missing {
        tracing::error!(field = field, "PayPal settings are invalid");
        return Err(PayPalError::Configuration { field });
    }

    Ok(OAuthCredentials::new(
        settings.client_id.as_str(),
        settings.client_secret.as_str(),
    ))
}

/// Authenticated PayPal REST client.
///
/// The bearer token is fetched once on construction and sent with every request
/// of this instance. Create a new client to pick up a fresh token.
pub struct PayPalClient {
    base_url: String,
    http: Client,
}

impl PayPalClient {
    /// Client against the sandbox or live API, depending on `settings.sandbox`.
    pub fn new(
        token_provider: &dyn TokenProvider,
        settings: &PayPalSettings,
        partner_attribution_id: &str,
    ) -> Result<Self, PayPalError> {
        let base_url = BaseUrl::for_sandbox(settings.sandbox);
        Self::with_base_url(token_provider, settings, base_url, partner_attribution_id)
    }

    /// Client against an explicit API root (proxies, test servers).
    pub fn with_base_url(
        token_provider: &dyn TokenProvider,
        settings: &PayPalSettings,
        base_url: &str,
        partner_attribution_id: &str,
    ) -> Result<Self, PayPalError> {
        let credentials = credentials_from(settings)?;
        let token = token_provider.get_token(&credentials, base_url)?;

        let authorization = token.authorization_value().ok_or_else(|| {
            PayPalError::InvalidResponse("PayPal token contains no access token".to_string())
        })?;
        let mut authorization = HeaderValue::from_str(&authorization).map_err(|_| {
            PayPalError::InvalidResponse(
                "PayPal access token is not a valid header value".to_string(),
            )
        })?;
        authorization.set_sensitive(true);

        let partner_attribution_id = HeaderValue::from_str(partner_attribution_id).map_err(|_| {
            PayPalError::Configuration {
                field: "partnerAttributionId",
            }
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            HeaderName::from_static(PARTNER_ATTRIBUTION_HEADER),
            partner_attribution_id,
        );

        let mut builder = Client::builder().default_headers(headers);
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }
        let http = builder.build().map_err(PayPalError::Transport)?;

        tracing::debug!(base_url = base_url, "PayPal client authenticated");

        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, resource_uri: &str) -> String {
        resource_url(&self.base_url, resource_uri)
    }

    pub fn post<S: PayPalStruct>(
        &self,
        resource_uri: &str,
        data: &S,
    ) -> Result<WireMap, PayPalError> {
        let _span = tracing::debug_span!("paypal_post", uri = resource_uri).entered();

        let payload = Value::Object(data.to_wire()?);
        let request = self.http.post(self.url(resource_uri)).json(&payload);
        read_response(request, Some(&payload))
    }

    pub fn patch<S: PayPalStruct>(
        &self,
        resource_uri: &str,
        data: &[S],
    ) -> Result<WireMap, PayPalError> {
        let _span = tracing::debug_span!("paypal_patch", uri = resource_uri).entered();

        let payload = Value::Array(
            data.iter()
                .map(|patch| patch.to_wire().map(Value::Object))
                .collect::<Result<Vec<_>, _>>()?,
        );
        let request = self.http.patch(self.url(resource_uri)).json(&payload);
        read_response(request, Some(&payload))
    }

    pub fn get(&self, resource_uri: &str) -> Result<WireMap, PayPalError> {
        let _span = tracing::debug_span!("paypal_get", uri = resource_uri).entered();

        read_response(self.http.get(self.url(resource_uri)), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_client_id() {
        let settings = PayPalSettings::new("", "secret", false);
        let err = credentials_from(&settings).unwrap_err();
        assert!(matches!(err, PayPalError::Configuration { field: "clientId" }));
    }

    #[test]
    fn test_credentials_require_client_secret() {
        let settings = PayPalSettings::new("id", "", false);
        let err = credentials_from(&settings).unwrap_err();
        assert!(matches!(err, PayPalError::Configuration { field: "clientSecret" }));
    }

    #[test]
    fn test_credentials_from_settings() {
        let settings = PayPalSettings::new("id", "secret", true);
        let credentials = credentials_from(&settings).unwrap();
        assert_eq!(credentials, OAuthCredentials::new("id", "secret"));
    }
}
