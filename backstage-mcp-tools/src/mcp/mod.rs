//! Model Context Protocol (MCP) server support
//!
//! This module implements the server infrastructure for handling MCP
//! requests against the catalog tool surface:
//!
//! - **Server Implementation**: [`CatalogServer`] handles MCP protocol
//!   messages
//! - **Tool Registry**: [`ToolRegistry`] manages available tools and
//!   their execution
//! - **Tool Context**: [`ToolContext`] provides tools with the catalog
//!   configuration, executor, and credential store
//!
//! ## Starting a server
//!
//! ```rust,no_run
//! use backstage_mcp_tools::catalog::CatalogConfig;
//! use backstage_mcp_tools::mcp::{run_stdio_server, CatalogServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CatalogConfig::from_env()?;
//! let server = CatalogServer::new(config)?;
//! run_stdio_server(server).await?;
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod server;
pub mod stdio_server;
pub mod tool_registry;
pub mod tools;
pub mod types;

// Re-export commonly used items from submodules
pub use server::CatalogServer;
pub use stdio_server::run_stdio_server;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
pub use tools::{register_auth_tools, register_catalog_tools};
