use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::connectors::paypal::api::Token;

/// Shared storage for OAuth tokens, keyed by credential identity.
pub trait TokenCache: Send + Sync {
    fn get(&self, cache_id: &str) -> Option<Token>;
    fn save(&self, cache_id: &str, token: &Token);
}

/// Process-local token cache.
#[derive(Default)]
pub struct InMemoryTokenCache {
    tokens: Mutex<HashMap<String, Token>>,
}

impl InMemoryTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn tokens(&self) -> MutexGuard<'_, HashMap<String, Token>> {
        // a panic while holding the lock leaves the map itself intact
        self.tokens
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TokenCache for InMemoryTokenCache {
    fn get(&self, cache_id: &str) -> Option<Token> {
        self.tokens().get(cache_id).cloned()
    }

    fn save(&self, cache_id: &str, token: &Token) {
        self.tokens().insert(cache_id.to_string(), token.clone());
    }
}
