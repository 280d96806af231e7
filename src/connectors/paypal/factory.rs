use std::sync::Arc;

use crate::connectors::config::PayPalSettings;
use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::client::PayPalClient;
use crate::connectors::paypal::token::TokenProvider;

/// Builds one authenticated [`PayPalClient`] per logical operation from shared
/// settings and a shared token provider.
#[derive(Clone)]
pub struct PayPalClientFactory {
    token_provider: Arc<dyn TokenProvider>,
    settings: PayPalSettings,
    base_url: Option<String>,
}

impl PayPalClientFactory {
    pub fn new(token_provider: Arc<dyn TokenProvider>, settings: PayPalSettings) -> Self {
        Self {
            token_provider,
            settings,
            base_url: None,
        }
    }

    /// Send every request to `base_url` instead of the sandbox/live API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn settings(&self) -> &PayPalSettings {
        &self.settings
    }

    /// Client attributed with the partner id from the settings.
    pub fn create_client(&self) -> Result<PayPalClient, PayPalError> {
        self.create_client_with_partner(&self.settings.partner_attribution_id)
    }

    pub fn create_client_with_partner(
        &self,
        partner_attribution_id: &str,
    ) -> Result<PayPalClient, PayPalError> {
        match self.base_url.as_deref() {
            Some(base_url) => PayPalClient::with_base_url(
                self.token_provider.as_ref(),
                &self.settings,
                base_url,
                partner_attribution_id,
            ),
            None => PayPalClient::new(
                self.token_provider.as_ref(),
                &self.settings,
                partner_attribution_id,
            ),
        }
    }
}
