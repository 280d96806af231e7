use serde::{Deserialize, Serialize};

use crate::connectors::paypal::PartnerAttributionId;

/// PayPal plugin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPalSettings {
    /// REST app client id
    #[serde(default)]
    pub client_id: String,
    /// REST app secret (from env: APP_PAYPAL__CLIENT_SECRET)
    #[serde(default, skip_serializing)]
    pub client_secret: String,
    /// Use api.sandbox.paypal.com instead of the live API
    #[serde(default)]
    pub sandbox: bool,
    /// Id of the webhook registered for this shop
    #[serde(default)]
    pub webhook_id: Option<String>,
    /// HTTP request timeout in seconds
    #[serde(default = "PayPalSettings::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Sent as PayPal-Partner-Attribution-Id
    #[serde(default = "PayPalSettings::default_partner_attribution_id")]
    pub partner_attribution_id: String,
}

impl PayPalSettings {
    const fn default_timeout_secs() -> u64 {
        30
    }

    fn default_partner_attribution_id() -> String {
        PartnerAttributionId::PAYPAL_CLASSIC.to_string()
    }

    pub fn new(client_id: &str, client_secret: &str, sandbox: bool) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            sandbox,
            ..Self::default()
        }
    }
}

impl Default for PayPalSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            sandbox: false,
            webhook_id: None,
            timeout_secs: Self::default_timeout_secs(),
            partner_attribution_id: Self::default_partner_attribution_id(),
        }
    }
}
