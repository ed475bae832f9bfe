//! Single entity lookup tool
//!
//! Fetches one entity through the catalog's by-name endpoint. Any
//! failure — unreachable catalog, non-success status, undecodable body —
//! reads as "Entity not found."; callers cannot distinguish a missing
//! entity from a network problem.

use async_trait::async_trait;
use reqwest::Method;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::catalog::format_entity;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetEntityRequest;

const NOT_FOUND: &str = "Entity not found.";

/// Tool for fetching a single catalog entity by kind/namespace/name
#[derive(Default)]
pub struct GetEntityTool;

impl GetEntityTool {
    /// Creates a new instance of the GetEntityTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetEntityTool {
    fn name(&self) -> &'static str {
        "get_entity"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "kind": {
                    "type": "string",
                    "description": "The entity kind (e.g. Component, API, System)"
                },
                "namespace": {
                    "type": "string",
                    "description": "The entity namespace"
                },
                "name": {
                    "type": "string",
                    "description": "The entity name"
                }
            },
            "required": ["kind", "namespace", "name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetEntityRequest = BaseToolImpl::parse_arguments(arguments)?;

        let url = context
            .config
            .entity_url(&request.kind, &request.namespace, &request.name);
        tracing::debug!("fetching entity from {url}");

        match context.executor.execute(Method::GET, &url, &[], None).await {
            Ok(entity) => Ok(BaseToolImpl::create_success_response(format_entity(
                &entity,
            ))),
            Err(error) => {
                tracing::warn!("entity lookup failed: {error}");
                Ok(BaseToolImpl::create_success_response(NOT_FOUND))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{response_text, test_context, MockExecutor};
    use serde_json::json;
    use std::sync::Arc;

    fn lookup_arguments() -> serde_json::Map<String, serde_json::Value> {
        let mut args = serde_json::Map::new();
        args.insert("kind".to_string(), json!("Component"));
        args.insert("namespace".to_string(), json!("team-a"));
        args.insert("name".to_string(), json!("svc"));
        args
    }

    #[test]
    fn test_tool_name() {
        assert_eq!(GetEntityTool::new().name(), "get_entity");
    }

    #[test]
    fn test_schema_requires_all_name_parts() {
        let schema = GetEntityTool::new().schema();
        let required = schema["required"].as_array().unwrap();
        for field in ["kind", "namespace", "name"] {
            assert!(required.contains(&json!(field)), "missing: {field}");
        }
    }

    #[tokio::test]
    async fn test_entity_is_formatted() {
        let executor = Arc::new(MockExecutor::returning(json!({
            "kind": "Component",
            "metadata": {"name": "svc", "namespace": "team-a", "description": "A service"}
        })));
        let context = test_context(executor.clone());

        let result = GetEntityTool::new()
            .execute(lookup_arguments(), &context)
            .await
            .unwrap();

        assert_eq!(
            response_text(&result),
            "Component:team-a/svc\nDescription: A service"
        );

        let requests = executor.requests.lock().await;
        assert!(requests[0]
            .url
            .ends_with("/entities/by-name/Component/team-a/svc"));
        assert!(requests[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_executor_failure_reports_not_found() {
        let context = test_context(Arc::new(MockExecutor::failing()));

        let result = GetEntityTool::new()
            .execute(lookup_arguments(), &context)
            .await
            .unwrap();

        assert_eq!(response_text(&result), "Entity not found.");
    }

    #[tokio::test]
    async fn test_missing_arguments_are_invalid() {
        let context = test_context(Arc::new(MockExecutor::failing()));
        let result = GetEntityTool::new()
            .execute(serde_json::Map::new(), &context)
            .await;
        assert!(result.is_err());
    }
}
