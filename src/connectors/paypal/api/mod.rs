pub mod patch;
pub mod payment;
pub mod token;
pub mod webhook;

pub use patch::Patch;
pub use payment::{
    Amount, ApplicationContext, Details, ExecutePayment, Item, ItemList, Link, Payer, PayerInfo,
    Payment, RedirectUrls, ShippingAddress, Transaction,
};
pub use token::{OAuthCredentials, Token};
pub use webhook::{CreateWebhooks, EventType, Webhook, WebhookEventTypes};
