//! PayPal REST API connector.
//!
//! * `mapper` / `name_converter` - typed structs <-> snake_case wire payloads
//! * `client` - authenticated JSON transport with provider error translation
//! * `token` - OAuth token acquisition and caching
//! * `resource` - payment and webhook endpoints on top of the client

pub mod api;
pub mod client;
pub mod factory;
pub mod mapper;
pub mod mock;
pub mod name_converter;
pub mod resource;
mod response;
pub mod token;

pub use client::PayPalClient;
pub use factory::PayPalClientFactory;
pub use mapper::{MapperError, PayPalStruct, WireMap};
pub use resource::{PaymentResource, WebhookResource};
pub use token::{
    HttpTokenClient, InMemoryTokenCache, TokenCache, TokenClient, TokenProvider, TokenResource,
};

/// API roots, including the version segment.
pub struct BaseUrl;

impl BaseUrl {
    pub const SANDBOX: &'static str = "https://api.sandbox.paypal.com/v1/";
    pub const LIVE: &'static str = "https://api.paypal.com/v1/";

    pub fn for_sandbox(sandbox: bool) -> &'static str {
        if sandbox {
            Self::SANDBOX
        } else {
            Self::LIVE
        }
    }
}

/// Values of the `PayPal-Partner-Attribution-Id` header, one per integration.
pub struct PartnerAttributionId;

impl PartnerAttributionId {
    pub const PAYPAL_CLASSIC: &'static str = "Shopware_Cart_EC_6native";
    pub const PAYPAL_EXPRESS_CHECKOUT: &'static str = "Shopware_Cart_ECS_6native";
    pub const PAYPAL_PLUS: &'static str = "Shopware_Cart_Plus_6native";
    pub const SMART_PAYMENT_BUTTONS: &'static str = "Shopware_Cart_SPB_6native";
}

/// Join a base URL and a resource path with exactly one slash.
pub(crate) fn resource_url(base_url: &str, resource_uri: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        resource_uri.trim_start_matches('/')
    )
}
