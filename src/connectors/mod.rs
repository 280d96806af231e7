//! External Service Connectors
//!
//! Adapters for the payment provider's REST API. Callers only see typed structs,
//! [`PayPalClient`] and the [`PayPalError`] taxonomy, never raw HTTP.
//!
//! ## Architecture Pattern
//!
//! 1. Wire payloads are declared with `paypal_struct!` in `paypal::api`
//! 2. `paypal::client` sends them with a bearer token from a [`TokenProvider`]
//! 3. Configuration in `config.rs`
//! 4. Resources (`PaymentResource`, `WebhookResource`) wrap the endpoints
//!
//! ## Testing
//!
//! ```ignore
//! let provider = MockTokenProvider::new();
//! let client = PayPalClient::with_base_url(
//!     &provider,
//!     &settings,
//!     &server.url(),
//!     PartnerAttributionId::PAYPAL_CLASSIC,
//! )?;
//! ```

pub mod config;
pub mod errors;
pub mod paypal;

pub use config::PayPalSettings;
pub use errors::{ApiError, ErrorDetail, PayPalError};
pub use paypal::{
    BaseUrl, PartnerAttributionId, PayPalClient, PayPalClientFactory, PaymentResource,
    TokenProvider, TokenResource, WebhookResource,
};
