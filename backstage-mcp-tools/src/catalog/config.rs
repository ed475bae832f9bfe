//! Catalog API configuration
//!
//! Configuration is read once at startup and handed to the server; no
//! module-level globals. The optional bearer token only seeds the
//! credential store — later token changes go through
//! [`crate::catalog::CredentialStore`].

use url::Url;

use super::error::{CatalogError, Result};

/// Environment variable naming the catalog API base URL
pub const BASE_URL_ENV: &str = "BACKSTAGE_API_BASE";

/// Environment variable holding the initial bearer token (optional)
pub const BEARER_TOKEN_ENV: &str = "BACKSTAGE_BEARER_TOKEN";

/// Configuration for the Backstage catalog API
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash
    base_url: String,
    /// Token used to seed the credential store at startup
    bearer_token: Option<String>,
}

impl CatalogConfig {
    /// Create a configuration from an explicit base URL and optional
    /// seed token. The base URL must parse as an absolute URL.
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    /// Load configuration from the environment.
    ///
    /// `BACKSTAGE_API_BASE` is required; `BACKSTAGE_BEARER_TOKEN` is
    /// optional and only consulted here, at process start.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| CatalogError::Configuration {
            message: format!("{BASE_URL_ENV} is not set"),
        })?;
        Self::new(base_url, std::env::var(BEARER_TOKEN_ENV).ok())
    }

    /// The catalog API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token to seed the credential store with, if any
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// URL of the entity listing endpoint
    pub fn entities_url(&self) -> String {
        format!("{}/entities", self.base_url)
    }

    /// URL of the by-name lookup endpoint for a single entity
    pub fn entity_url(&self, kind: &str, namespace: &str, name: &str) -> String {
        format!(
            "{}/entities/by-name/{kind}/{namespace}/{name}",
            self.base_url
        )
    }

    /// URL of the ancestry endpoint for a single entity
    pub fn ancestry_url(&self, kind: &str, namespace: &str, name: &str) -> String {
        format!("{}/ancestry", self.entity_url(kind, namespace, name))
    }
}
