//! Shared bearer token storage
//!
//! One token for the whole process, seeded from configuration and
//! replaceable at any time through the `set_bearer_token` tool. Reads
//! and writes are individually atomic; a replacement racing an in-flight
//! request keeps last-write-wins semantics.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle to the process-wide bearer token
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    token: Arc<RwLock<Option<String>>>,
}

impl CredentialStore {
    /// Create a store holding the given initial token
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Replace the current token. No validation; last write wins.
    pub async fn set(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// The current token, if one is set
    pub async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Whether a token is currently held
    pub async fn is_set(&self) -> bool {
        self.token.read().await.is_some()
    }
}
