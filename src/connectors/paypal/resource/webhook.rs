use serde_json::Value;

use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::api::{CreateWebhooks, Patch};
use crate::connectors::paypal::client::PayPalClient;
use crate::connectors::paypal::mapper::PayPalStruct;

pub const WEBHOOK_RESOURCE: &str = "notifications/webhooks";

/// `/v1/notifications/webhooks` endpoints.
pub struct WebhookResource<'a> {
    client: &'a PayPalClient,
}

impl<'a> WebhookResource<'a> {
    pub fn new(client: &'a PayPalClient) -> Self {
        Self { client }
    }

    /// Register `url` for the given event types, returns the webhook id.
    pub fn create_webhook(&self, url: &str, event_types: &[&str]) -> Result<String, PayPalError> {
        let response = self
            .client
            .post(WEBHOOK_RESOURCE, &CreateWebhooks::new(url, event_types))?;
        let webhook = CreateWebhooks::from_wire(response)?;

        webhook
            .id
            .ok_or_else(|| missing_field("id"))
    }

    pub fn get_webhook_url(&self, webhook_id: &str) -> Result<String, PayPalError> {
        let response = self
            .client
            .get(&format!("{}/{}", WEBHOOK_RESOURCE, webhook_id))?;
        let webhook = CreateWebhooks::from_wire(response)?;

        webhook.url.ok_or_else(|| missing_field("url"))
    }

    pub fn update_webhook_url(
        &self,
        webhook_id: &str,
        url: &str,
    ) -> Result<CreateWebhooks, PayPalError> {
        let patches = [Patch::replace("/url", Value::String(url.to_string()))];
        let response = self
            .client
            .patch(&format!("{}/{}", WEBHOOK_RESOURCE, webhook_id), &patches)?;

        Ok(CreateWebhooks::from_wire(response)?)
    }
}

fn missing_field(field: &str) -> PayPalError {
    let err = PayPalError::InvalidResponse(format!("webhook response has no \"{}\"", field));
    tracing::error!("{}", err);
    err
}
