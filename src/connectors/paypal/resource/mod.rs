//! Typed endpoints on top of [`PayPalClient`](super::PayPalClient).

mod payment;
mod webhook;

pub use payment::PaymentResource;
pub use webhook::WebhookResource;
