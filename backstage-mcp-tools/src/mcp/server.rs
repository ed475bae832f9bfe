//! MCP server implementation for serving catalog tools

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use tokio::sync::RwLock;

use crate::catalog::{CatalogClient, CatalogConfig, CatalogExecutor, CredentialStore, Result};

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::{register_auth_tools, register_catalog_tools};

/// Server instructions displayed to MCP clients
const SERVER_INSTRUCTIONS: &str = "Query the Backstage software catalog: list entities, look up a \
single entity by kind/namespace/name, or walk its ancestry. If the catalog requires \
authentication, set a bearer token first with set_bearer_token.";

/// MCP server exposing the Backstage catalog tool surface.
#[derive(Clone)]
pub struct CatalogServer {
    tool_registry: Arc<RwLock<ToolRegistry>>,
    /// Shared context handed to every tool execution
    pub tool_context: Arc<ToolContext>,
}

impl CatalogServer {
    /// Create a server talking to the configured catalog over HTTP.
    ///
    /// The credential store is seeded from the configuration's bearer
    /// token and shared between the HTTP client and the
    /// `set_bearer_token` tool.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let credentials = CredentialStore::new(config.bearer_token().map(str::to_string));
        let client = CatalogClient::new(credentials.clone())?;
        Self::with_executor(config, Arc::new(client), credentials)
    }

    /// Create a server around an explicit executor.
    ///
    /// Tests use this to substitute a scripted executor for the HTTP
    /// client.
    pub fn with_executor(
        config: CatalogConfig,
        executor: Arc<dyn CatalogExecutor>,
        credentials: CredentialStore,
    ) -> Result<Self> {
        let mut tool_registry = ToolRegistry::new();
        register_auth_tools(&mut tool_registry);
        register_catalog_tools(&mut tool_registry);
        tracing::debug!("registered {} catalog tools", tool_registry.len());

        let tool_context = ToolContext::new(Arc::new(config), executor, credentials);

        Ok(Self {
            tool_registry: Arc::new(RwLock::new(tool_registry)),
            tool_context: Arc::new(tool_context),
        })
    }

    /// List all available tools from the tool registry.
    pub async fn list_tools(&self) -> Vec<Tool> {
        self.tool_registry.read().await.list_tools()
    }

    /// Check whether a tool with the given name is registered.
    pub async fn has_tool(&self, name: &str) -> bool {
        self.tool_registry.read().await.get_tool(name).is_some()
    }

    /// Execute a tool by name with the given arguments.
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, McpError> {
        let registry = self.tool_registry.read().await;
        if let Some(tool) = registry.get_tool(name) {
            let arguments_map = match arguments {
                serde_json::Value::Object(map) => map,
                _ => serde_json::Map::new(),
            };
            tool.execute(arguments_map, &self.tool_context).await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            ))
        }
    }
}

/// Create ServerCapabilities for the MCP protocol: tools only, no
/// prompts or resources.
fn create_server_capabilities() -> ServerCapabilities {
    ServerCapabilities::builder().enable_tools().build()
}

impl ServerHandler for CatalogServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.read().await.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!(
            "call_tool() invoked for tool: {}, arguments: {:?}",
            request.name,
            request.arguments
        );

        let registry = self.tool_registry.read().await;
        let tool = registry.get_tool(&request.name).ok_or_else(|| {
            tracing::error!("unknown tool requested: {}", request.name);
            McpError::invalid_request(format!("Unknown tool: {}", request.name), None)
        })?;

        let arguments = request.arguments.unwrap_or_default();

        tracing::info!("executing tool: {}", request.name);
        tool.execute(arguments, &self.tool_context).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(create_server_capabilities()).with_instructions(SERVER_INSTRUCTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockExecutor;
    use serde_json::json;

    fn test_server(executor: Arc<MockExecutor>) -> CatalogServer {
        let config = CatalogConfig::new("http://catalog.test/api/catalog", None).unwrap();
        CatalogServer::with_executor(config, executor, CredentialStore::default()).unwrap()
    }

    #[tokio::test]
    async fn test_server_registers_all_tools() {
        let server = test_server(Arc::new(MockExecutor::failing()));

        for name in [
            "set_bearer_token",
            "list_entities",
            "get_entity",
            "get_entity_ancestry",
        ] {
            assert!(server.has_tool(name).await, "missing tool: {name}");
        }
        assert_eq!(server.list_tools().await.len(), 4);
    }

    #[tokio::test]
    async fn test_execute_unknown_tool_is_an_error() {
        let server = test_server(Arc::new(MockExecutor::failing()));
        let result = server.execute_tool("no_such_tool", json!({})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_listed_tools_have_descriptions_and_schemas() {
        let server = test_server(Arc::new(MockExecutor::failing()));
        for tool in server.list_tools().await {
            assert!(tool.description.is_some());
            assert!(tool.input_schema.contains_key("type"));
        }
    }
}
