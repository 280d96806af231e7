//! Webhook payloads: inbound notifications and webhook registration.

use serde_json::Value;

use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::api::payment::Link;
use crate::connectors::paypal::mapper::{paypal_struct, PayPalStruct, WireMap};

/// Event names PayPal sends in `event_type`.
pub struct WebhookEventTypes;

impl WebhookEventTypes {
    pub const ALL_EVENTS: &'static str = "*";
    pub const PAYMENT_AUTHORIZATION_CREATED: &'static str = "PAYMENT.AUTHORIZATION.CREATED";
    pub const PAYMENT_AUTHORIZATION_VOIDED: &'static str = "PAYMENT.AUTHORIZATION.VOIDED";
    pub const PAYMENT_CAPTURE_COMPLETED: &'static str = "PAYMENT.CAPTURE.COMPLETED";
    pub const PAYMENT_CAPTURE_DENIED: &'static str = "PAYMENT.CAPTURE.DENIED";
    pub const PAYMENT_CAPTURE_PENDING: &'static str = "PAYMENT.CAPTURE.PENDING";
    pub const PAYMENT_CAPTURE_REFUNDED: &'static str = "PAYMENT.CAPTURE.REFUNDED";
    pub const PAYMENT_CAPTURE_REVERSED: &'static str = "PAYMENT.CAPTURE.REVERSED";
    pub const PAYMENT_SALE_COMPLETED: &'static str = "PAYMENT.SALE.COMPLETED";
    pub const PAYMENT_SALE_DENIED: &'static str = "PAYMENT.SALE.DENIED";
    pub const PAYMENT_SALE_PENDING: &'static str = "PAYMENT.SALE.PENDING";
    pub const PAYMENT_SALE_REFUNDED: &'static str = "PAYMENT.SALE.REFUNDED";
    pub const PAYMENT_SALE_REVERSED: &'static str = "PAYMENT.SALE.REVERSED";
}

paypal_struct! {
    /// Notification PayPal posts to the shop's webhook URL.
    pub struct Webhook {
        id ("id"): scalar String,
        create_time ("createTime"): scalar String,
        resource_type ("resourceType"): scalar String,
        event_type ("eventType"): scalar String,
        summary ("summary"): scalar String,
        resource ("resource"): raw Value,
        links ("links"): many Link,
    }
}

impl Webhook {
    /// Parse an inbound notification body.
    pub fn from_json(body: &str) -> Result<Self, PayPalError> {
        let wire: WireMap = serde_json::from_str(body)
            .map_err(|e| PayPalError::InvalidResponse(format!("Invalid webhook body: {}", e)))?;
        Ok(Self::from_wire(wire)?)
    }

    /// String field of the event resource, e.g. `parent_payment`.
    pub fn resource_str(&self, key: &str) -> Option<&str> {
        self.resource.get(key)?.as_str()
    }
}

paypal_struct! {
    /// Body of `POST /v1/notifications/webhooks`; also returned by `GET`.
    pub struct CreateWebhooks {
        id ("id"): scalar String,
        url ("url"): scalar String,
        event_types ("eventTypes"): many EventType,
        links ("links"): many Link,
    }
}

paypal_struct! {
    pub struct EventType {
        name ("name"): scalar String,
        description ("description"): scalar String,
        status ("status"): scalar String,
    }
}

impl CreateWebhooks {
    pub fn new(url: &str, event_types: &[&str]) -> Self {
        Self {
            url: Some(url.to_string()),
            event_types: Some(
                event_types
                    .iter()
                    .map(|name| EventType {
                        name: Some(name.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }
}
