//! `paypal` command line tool.
//!
//! Talks to the PayPal REST API with the credentials from `configuration.yaml`
//! or `APP_PAYPAL__*` environment variables and prints the JSON answers:
//!
//! ```text
//! paypal token
//! paypal get payments/payment?count=5
//! paypal payment PAY-1B56960729604235TKQQIYVY
//! paypal create-webhook --url https://shop.example/paypal/webhook
//! paypal webhook-url 8PT597110X687430LKGECATA
//! ```

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use swag_paypal::configuration::get_configuration;
use swag_paypal::connectors::paypal::api::WebhookEventTypes;
use swag_paypal::connectors::paypal::client::credentials_from;
use swag_paypal::connectors::paypal::{BaseUrl, PayPalClientFactory, TokenProvider};
use swag_paypal::connectors::{PaymentResource, TokenResource, WebhookResource};
use swag_paypal::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(name = "paypal", version, about = "Call the PayPal REST API")]
struct Cli {
    /// Use the sandbox API regardless of the configured mode
    #[arg(long, global = true)]
    sandbox: bool,

    #[command(subcommand)]
    command: PayPalCommands,
}

#[derive(Debug, Subcommand)]
enum PayPalCommands {
    /// Fetch an OAuth access token
    Token,
    /// GET a resource path relative to the API root
    Get {
        /// e.g. payments/payment/PAY-123
        path: String,
    },
    /// Show a payment
    Payment {
        payment_id: String,
    },
    /// Register a webhook and print its id
    CreateWebhook {
        #[arg(long)]
        url: String,
        /// Event types to subscribe to (default: all)
        #[arg(long = "event", value_name = "EVENT_TYPE")]
        events: Vec<String>,
    },
    /// Show the URL a webhook posts to
    WebhookUrl {
        webhook_id: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = get_configuration()?;
    if cli.sandbox {
        settings.paypal.sandbox = true;
    }

    let subscriber = get_subscriber("paypal".into(), settings.log_level.clone(), std::io::stderr);
    init_subscriber(subscriber);

    let token_provider = Arc::new(TokenResource::in_memory(settings.paypal.timeout_secs)?);
    let factory = PayPalClientFactory::new(token_provider.clone(), settings.paypal);

    match cli.command {
        PayPalCommands::Token => {
            let credentials = credentials_from(factory.settings())?;
            let base_url = BaseUrl::for_sandbox(factory.settings().sandbox);
            print_json(&token_provider.get_token(&credentials, base_url)?)
        }
        PayPalCommands::Get { path } => print_json(&factory.create_client()?.get(&path)?),
        PayPalCommands::Payment { payment_id } => {
            let client = factory.create_client()?;
            print_json(&PaymentResource::new(&client).get(&payment_id)?)
        }
        PayPalCommands::CreateWebhook { url, events } => {
            let events: Vec<&str> = if events.is_empty() {
                vec![WebhookEventTypes::ALL_EVENTS]
            } else {
                events.iter().map(String::as_str).collect()
            };
            let client = factory.create_client()?;
            let id = WebhookResource::new(&client).create_webhook(&url, &events)?;
            print_json(&json!({ "id": id }))
        }
        PayPalCommands::WebhookUrl { webhook_id } => {
            let client = factory.create_client()?;
            let url = WebhookResource::new(&client).get_webhook_url(&webhook_id)?;
            print_json(&json!({ "id": webhook_id, "url": url }))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
