//! Bearer token replacement tool
//!
//! Overwrites the process-wide credential store. All subsequent catalog
//! requests carry the new token until it is replaced again.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SetBearerTokenRequest;

/// Confirmation returned after the token has been replaced
const TOKEN_SET_MESSAGE: &str = "Bearer token set.";

/// Tool for replacing the bearer token used on catalog requests
#[derive(Default)]
pub struct SetBearerTokenTool;

impl SetBearerTokenTool {
    /// Creates a new instance of the SetBearerTokenTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SetBearerTokenTool {
    fn name(&self) -> &'static str {
        "set_bearer_token"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "token": {
                    "type": "string",
                    "description": "The bearer token to send on subsequent catalog requests"
                }
            },
            "required": ["token"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SetBearerTokenRequest = BaseToolImpl::parse_arguments(arguments)?;

        context.credentials.set(request.token).await;
        tracing::debug!("bearer token replaced");

        Ok(BaseToolImpl::create_success_response(TOKEN_SET_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_context, MockExecutor};
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::sync::Arc;

    fn token_arguments(token: &str) -> serde_json::Map<String, serde_json::Value> {
        let mut args = serde_json::Map::new();
        args.insert("token".to_string(), json!(token));
        args
    }

    #[test]
    fn test_tool_name() {
        assert_eq!(SetBearerTokenTool::new().name(), "set_bearer_token");
    }

    #[test]
    fn test_tool_schema_requires_token() {
        let schema = SetBearerTokenTool::new().schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("token")));
    }

    #[tokio::test]
    async fn test_execute_stores_the_token() {
        let context = test_context(Arc::new(MockExecutor::failing()));
        let tool = SetBearerTokenTool::new();

        let result = tool
            .execute(token_arguments("abc"), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "Bearer token set.");
        } else {
            panic!("Expected text content");
        }
        assert_eq!(context.credentials.get().await, Some("abc".to_string()));
    }

    #[tokio::test]
    async fn test_latest_token_wins() {
        let context = test_context(Arc::new(MockExecutor::failing()));
        let tool = SetBearerTokenTool::new();

        tool.execute(token_arguments("first"), &context)
            .await
            .unwrap();
        tool.execute(token_arguments("second"), &context)
            .await
            .unwrap();

        assert_eq!(context.credentials.get().await, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_missing_token_is_invalid() {
        let context = test_context(Arc::new(MockExecutor::failing()));
        let tool = SetBearerTokenTool::new();

        let result = tool.execute(serde_json::Map::new(), &context).await;
        assert!(result.is_err());
    }
}
