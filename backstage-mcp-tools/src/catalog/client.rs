//! HTTP request executor for the Backstage catalog API
//!
//! One outbound request per call, no retries, no caching. The
//! [`CatalogExecutor`] trait is the seam the tool layer depends on;
//! [`CatalogClient`] is the production implementation backed by reqwest.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::Value;

use super::credentials::CredentialStore;
use super::error::{CatalogError, Result};

/// Client identifier sent on every catalog request
const USER_AGENT: &str = "backstage-mcp/1.0";

/// Outbound request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A single-shot request executor against the catalog API.
///
/// Implementations perform exactly one HTTP exchange and either return
/// the decoded JSON body or a [`CatalogError`] naming what went wrong.
#[async_trait::async_trait]
pub trait CatalogExecutor: Send + Sync {
    /// Issue one request and decode the JSON response body.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value>;
}

/// Production executor backed by a reqwest client
pub struct CatalogClient {
    http: reqwest::Client,
    credentials: CredentialStore,
}

impl CatalogClient {
    /// Build the HTTP client with the fixed identification headers and
    /// request timeout. The credential store is read again on every
    /// request, so token changes take effect immediately.
    pub fn new(credentials: CredentialStore) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, credentials })
    }

    async fn prepare(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> reqwest::RequestBuilder {
        let mut request = self.http.request(method, url).query(query);
        if let Some(token) = self.credentials.get().await {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }
}

#[async_trait::async_trait]
impl CatalogExecutor for CatalogClient {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let request = self.prepare(method, url, query, body).await;
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let payload = response.text().await?;
        Ok(serde_json::from_str(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(token: Option<&str>) -> (CatalogClient, CredentialStore) {
        let credentials = CredentialStore::new(token.map(str::to_string));
        let client = CatalogClient::new(credentials.clone()).unwrap();
        (client, credentials)
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_set() {
        let (client, _) = client_with(Some("abc"));
        let request = client
            .prepare(Method::GET, "http://catalog.test/entities", &[], None)
            .await
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer abc"
        );
    }

    #[tokio::test]
    async fn test_no_bearer_header_without_token() {
        let (client, _) = client_with(None);
        let request = client
            .prepare(Method::GET, "http://catalog.test/entities", &[], None)
            .await
            .build()
            .unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_replaced_token_is_used_on_next_request() {
        let (client, credentials) = client_with(Some("first"));
        credentials.set("second").await;

        let request = client
            .prepare(Method::GET, "http://catalog.test/entities", &[], None)
            .await
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer second"
        );
    }

    #[tokio::test]
    async fn test_query_parameters_are_encoded() {
        let (client, _) = client_with(None);
        let query = vec![
            ("limit".to_string(), "10".to_string()),
            (
                "filter".to_string(),
                "kind=Component,metadata.namespace=team-a".to_string(),
            ),
        ];
        let request = client
            .prepare(Method::GET, "http://catalog.test/entities", &query, None)
            .await
            .build()
            .unwrap();
        let url = request.url().as_str();
        assert!(url.contains("limit=10"));
        assert!(url.contains("filter=kind%3DComponent"));
    }
}
