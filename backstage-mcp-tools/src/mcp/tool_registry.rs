//! Tool registry for MCP operations
//!
//! A registry pattern for managing MCP tools:
//!
//! 1. **McpTool Trait**: the interface every tool implements
//! 2. **ToolRegistry**: stores and looks up tool instances by name
//! 3. **ToolContext**: shared access to the catalog configuration,
//!    request executor, and credential store
//! 4. **BaseToolImpl**: common argument-parsing and response helpers
//!
//! To add a tool: implement [`McpTool`], define its JSON Schema with
//! `serde_json::json!`, load its description with
//! `include_str!("description.md")`, and register it from the module's
//! `register_*_tools` function.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use rmcp::ErrorData as McpError;

use crate::catalog::{CatalogConfig, CatalogExecutor, CredentialStore};

/// Context shared by all tools during execution
///
/// Tools receive everything they need through this context rather than
/// through process-wide state, which keeps them independently testable
/// against a scripted executor.
#[derive(Clone)]
pub struct ToolContext {
    /// Catalog API configuration (base URL and endpoint builders)
    pub config: Arc<CatalogConfig>,

    /// The outbound request executor
    pub executor: Arc<dyn CatalogExecutor>,

    /// The bearer token store, shared with the executor
    pub credentials: CredentialStore,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(
        config: Arc<CatalogConfig>,
        executor: Arc<dyn CatalogExecutor>,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            config,
            executor,
            credentials,
        }
    }
}

/// Trait defining the interface for all MCP tools
///
/// Tools are stateless: all context comes from the [`ToolContext`]. Tool
/// names are stable identifiers; descriptions are loaded from each
/// tool's `description.md`.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// The tool's unique identifier name
    fn name(&self) -> &'static str;

    /// The tool's human-readable description
    fn description(&self) -> &'static str;

    /// The JSON Schema describing the tool's arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
///
/// HashMap-backed name lookup; tools are registered once at server
/// construction and never change afterwards.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as Tool objects for the MCP list_tools
    /// response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool::new(tool.name(), tool.description(), Arc::new(schema_map))
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with the given text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult::success(vec![Content::text(content.into())])
    }

    /// Create an error response with the given error message
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult::error(vec![Content::text(error_text)])
    }
}
