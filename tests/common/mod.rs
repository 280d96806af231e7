#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use swag_paypal::connectors::paypal::mock::MockTokenProvider;
use swag_paypal::connectors::{PartnerAttributionId, PayPalClient, PayPalSettings};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

pub fn settings() -> PayPalSettings {
    PayPalSettings::new("client-id", "client-secret", true)
}

pub fn client_for(base_url: &str) -> PayPalClient {
    PayPalClient::with_base_url(
        &MockTokenProvider::new(),
        &settings(),
        base_url,
        PartnerAttributionId::PAYPAL_CLASSIC,
    )
    .expect("Failed to create PayPal client")
}

/// Base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1/", port)
}

struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` and count the error level events it logs on this thread.
pub fn count_error_logs<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let errors = Arc::new(AtomicUsize::new(0));
    let subscriber = Registry::default().with(ErrorCounter(errors.clone()));
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, errors.load(Ordering::SeqCst))
}
