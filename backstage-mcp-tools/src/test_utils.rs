//! Test utilities shared by unit tests
//!
//! `MockExecutor` stands in for the HTTP client: it records every
//! request it receives and replays a scripted outcome, so tool behavior
//! can be asserted without a running catalog.

use std::sync::Arc;

use reqwest::Method;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::catalog::{CatalogConfig, CatalogError, CatalogExecutor, CredentialStore, Result};
use crate::mcp::tool_registry::ToolContext;

/// A single request observed by [`MockExecutor`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method of the request
    pub method: Method,
    /// Full request URL
    pub url: String,
    /// Query parameters, in the order they were supplied
    pub query: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
}

/// Scripted executor: records every request and replays a fixed outcome
pub struct MockExecutor {
    response: Option<Value>,
    /// The requests this executor has observed
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl MockExecutor {
    /// An executor that succeeds with the given JSON value
    pub fn returning(response: Value) -> Self {
        Self {
            response: Some(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// An executor that fails every request
    pub fn failing() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogExecutor for MockExecutor {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        self.requests.lock().await.push(RecordedRequest {
            method,
            url: url.to_string(),
            query: query.to_vec(),
            body: body.cloned(),
        });

        match &self.response {
            Some(value) => Ok(value.clone()),
            None => Err(CatalogError::Other {
                message: "scripted failure".to_string(),
            }),
        }
    }
}

/// Build a tool context around the given executor
pub fn test_context(executor: Arc<MockExecutor>) -> ToolContext {
    let config = CatalogConfig::new("http://catalog.test/api/catalog", None)
        .expect("valid test base URL");
    ToolContext::new(Arc::new(config), executor, CredentialStore::default())
}

/// Extract the text of the first content block of a tool result
pub fn response_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {other:?}"),
    }
}
