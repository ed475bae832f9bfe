//! Entity listing tool
//!
//! Lists catalog entities with optional kind/namespace filtering and a
//! passed-through page limit. The catalog's filter syntax joins
//! `field=value` clauses with commas.

use async_trait::async_trait;
use reqwest::Method;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::catalog::{format_entity, EntityPage, ENTITY_SEPARATOR};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{ListEntitiesRequest, DEFAULT_ENTITY_LIMIT};

const UNABLE_TO_FETCH: &str = "Unable to fetch entities.";
const NO_ENTITIES: &str = "No entities found.";

/// Tool for listing catalog entities
#[derive(Default)]
pub struct ListEntitiesTool;

impl ListEntitiesTool {
    /// Creates a new instance of the ListEntitiesTool
    pub fn new() -> Self {
        Self
    }
}

/// Build the comma-joined catalog filter expression. Clause order is
/// fixed: kind first, then metadata.namespace.
fn build_filter(kind: Option<&str>, namespace: Option<&str>) -> Option<String> {
    let mut clauses = Vec::new();
    if let Some(kind) = kind {
        clauses.push(format!("kind={kind}"));
    }
    if let Some(namespace) = namespace {
        clauses.push(format!("metadata.namespace={namespace}"));
    }
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(","))
    }
}

#[async_trait]
impl McpTool for ListEntitiesTool {
    fn name(&self) -> &'static str {
        "list_entities"
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
                    "description": "Restrict the listing to this entity kind (e.g. Component, API, System)"
                },
                "namespace": {
                    "type": "string",
                    "description": "Restrict the listing to this namespace"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of entities to return",
                    "minimum": 1,
                    "default": DEFAULT_ENTITY_LIMIT
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListEntitiesRequest = BaseToolImpl::parse_arguments(arguments)?;

        let mut query = vec![("limit".to_string(), request.limit.to_string())];
        if let Some(filter) = build_filter(request.kind.as_deref(), request.namespace.as_deref()) {
            query.push(("filter".to_string(), filter));
        }

        let url = context.config.entities_url();
        tracing::debug!("listing entities from {url}");

        let response = match context.executor.execute(Method::GET, &url, &query, None).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!("entity listing failed: {error}");
                return Ok(BaseToolImpl::create_success_response(UNABLE_TO_FETCH));
            }
        };

        let entities = match EntityPage::from_response(response) {
            EntityPage::Entities(entities) => entities,
            EntityPage::Unrecognized => {
                return Ok(BaseToolImpl::create_success_response(NO_ENTITIES));
            }
        };

        // Non-object elements are silently skipped.
        let formatted: Vec<String> = entities
            .iter()
            .filter(|entity| entity.is_object())
            .map(format_entity)
            .collect();

        if formatted.is_empty() {
            Ok(BaseToolImpl::create_success_response(NO_ENTITIES))
        } else {
            Ok(BaseToolImpl::create_success_response(
                formatted.join(ENTITY_SEPARATOR),
            ))
        }
    }
}
