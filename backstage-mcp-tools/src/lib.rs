//! # Backstage MCP Tools
//!
//! MCP (Model Context Protocol) tools and server implementation for the
//! Backstage software catalog.
//!
//! This crate provides an MCP server that exposes read-oriented catalog
//! operations as tools:
//!
//! - **`list_entities`**: List catalog entities, optionally filtered by
//!   kind and namespace
//! - **`get_entity`**: Look up a single entity by kind/namespace/name
//! - **`get_entity_ancestry`**: Walk the ancestry chain of an entity
//! - **`set_bearer_token`**: Replace the bearer token used on catalog
//!   requests
//!
//! ## Usage
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

#![warn(missing_docs)]

/// Backstage catalog access: configuration, credentials, and the HTTP
/// request executor
pub mod catalog;

/// Model Context Protocol (MCP) server and tools
pub mod mcp;

/// Test utilities
#[cfg(test)]
pub mod test_utils;

// Re-export key types for convenience
pub use catalog::{CatalogClient, CatalogConfig, CatalogError, CredentialStore};
pub use mcp::{run_stdio_server, CatalogServer};
pub use mcp::{ToolContext, ToolRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
