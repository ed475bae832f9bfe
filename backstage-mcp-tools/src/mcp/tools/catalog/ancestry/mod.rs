//! Entity ancestry tool
//!
//! Walks the ancestry chain the catalog reports for an entity. Each
//! ancestry item wraps an entity; items without one format as the empty
//! entity rather than failing the whole chain.

use async_trait::async_trait;
use reqwest::Method;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::catalog::{AncestryNode, AncestryResponse, ENTITY_SEPARATOR};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetEntityAncestryRequest;

const UNABLE_TO_FETCH: &str = "Unable to fetch ancestry.";
const NO_ANCESTRY: &str = "No ancestry found.";

/// Tool for fetching the ancestry chain of a catalog entity
#[derive(Default)]
pub struct GetEntityAncestryTool;

impl GetEntityAncestryTool {
    /// Creates a new instance of the GetEntityAncestryTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetEntityAncestryTool {
    fn name(&self) -> &'static str {
        "get_entity_ancestry"
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
        let request: GetEntityAncestryRequest = BaseToolImpl::parse_arguments(arguments)?;

        let url = context
            .config
            .ancestry_url(&request.kind, &request.namespace, &request.name);
        tracing::debug!("fetching ancestry from {url}");

        let response = match context.executor.execute(Method::GET, &url, &[], None).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!("ancestry lookup failed: {error}");
                return Ok(BaseToolImpl::create_success_response(UNABLE_TO_FETCH));
            }
        };

        let ancestry: AncestryResponse = match serde_json::from_value(response) {
            Ok(ancestry) => ancestry,
            Err(error) => {
                tracing::warn!("unexpected ancestry payload: {error}");
                return Ok(BaseToolImpl::create_success_response(UNABLE_TO_FETCH));
            }
        };

        if ancestry.items.is_empty() {
            return Ok(BaseToolImpl::create_success_response(NO_ANCESTRY));
        }

        let formatted: Vec<String> = ancestry.items.iter().map(AncestryNode::format).collect();
        Ok(BaseToolImpl::create_success_response(
            formatted.join(ENTITY_SEPARATOR),
        ))
    }
}
